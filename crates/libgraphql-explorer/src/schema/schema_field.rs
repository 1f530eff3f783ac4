use crate::schema::DeprecationState;
use crate::schema::SchemaInputValue;
use crate::schema::TypeRef;

/// Represents a field defined on an `OBJECT` or `INTERFACE`
/// [`SchemaType`](crate::schema::SchemaType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaField {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) args: Vec<SchemaInputValue>,
    pub(crate) type_ref: TypeRef,
    pub(crate) is_deprecated: bool,
    pub(crate) deprecation_reason: Option<String>,
}
impl SchemaField {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            args: vec![],
            type_ref,
            is_deprecated: false,
            deprecation_reason: None,
        }
    }

    pub fn with_args(mut self, args: Vec<SchemaInputValue>) -> Self {
        self.args = args;
        self
    }

    pub fn with_deprecation(mut self, reason: Option<&str>) -> Self {
        self.is_deprecated = true;
        self.deprecation_reason = reason.map(str::to_string);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn args(&self) -> &[SchemaInputValue] {
        &self.args
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        DeprecationState::new(
            self.is_deprecated,
            self.deprecation_reason.as_deref(),
        )
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
