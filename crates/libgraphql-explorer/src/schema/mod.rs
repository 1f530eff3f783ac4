mod deprecation_state;
mod enum_value;
mod input_value;
mod operation_kind;
mod schema_field;
mod schema_model;
mod schema_type;
mod type_kind;
mod type_ref;

pub use deprecation_state::DeprecationState;
pub use enum_value::SchemaEnumValue;
pub use input_value::SchemaInputValue;
pub use operation_kind::OperationKind;
pub use schema_field::SchemaField;
pub use schema_model::SchemaModel;
pub use schema_type::SchemaType;
pub use type_kind::TypeKind;
pub use type_kind::UnknownTypeKind;
pub use type_ref::TypeRef;

#[cfg(test)]
mod tests;
