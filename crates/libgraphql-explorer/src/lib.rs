pub mod client;
pub mod introspection;
pub mod query_text;
pub mod sample;
pub mod schema;
pub mod selection;
pub mod sync;
pub mod tree;

pub use introspection::IntrospectionResponseDecoder;
pub use query_text::QueryTextParser;
pub use query_text::QueryTextSynthesizer;
pub use sample::SampleDataSynthesizer;
pub use schema::SchemaModel;
pub use selection::FieldPath;
pub use selection::SelectionStore;
pub use sync::FieldSelectionSync;
pub use tree::SelectionTree;

#[cfg(test)]
mod test_utils;
