mod buffer_text_surface;
mod field_selection_sync;
mod sync_flag;
mod text_surface;

pub use buffer_text_surface::BufferTextSurface;
pub use buffer_text_surface::TextListener;
pub use field_selection_sync::FieldSelectionSync;
pub use sync_flag::SyncFlag;
pub use sync_flag::SyncFlagGuard;
pub use text_surface::TextSurface;

#[cfg(test)]
mod tests;
