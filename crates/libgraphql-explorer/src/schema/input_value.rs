use crate::schema::TypeRef;

/// An argument of a [`SchemaField`](crate::schema::SchemaField) or an input
/// field of an `INPUT_OBJECT` type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaInputValue {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) type_ref: TypeRef,
    pub(crate) default_value: Option<String>,
}
impl SchemaInputValue {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_ref,
            default_value: None,
        }
    }

    /// The default value in GraphQL literal syntax, exactly as introspection
    /// reported it.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
