mod argument_value;
mod checkbox_state;
mod field_path;
mod listener_id;
mod selection;
mod selection_map;
mod selection_snapshot;
mod selection_store;

pub use argument_value::ArgumentValue;
pub use checkbox_state::CheckboxState;
pub use field_path::FieldPath;
pub use field_path::FieldPathParseError;
pub use listener_id::ListenerId;
pub(crate) use listener_id::ListenerIdGenerator;
pub use selection::Arguments;
pub use selection::Selection;
use selection_map::SelectionMap;
pub use selection_snapshot::SelectionSnapshot;
pub use selection_store::SelectionBatch;
pub use selection_store::SelectionListener;
pub use selection_store::SelectionStore;
