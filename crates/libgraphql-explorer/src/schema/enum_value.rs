use crate::schema::DeprecationState;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaEnumValue {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) is_deprecated: bool,
    pub(crate) deprecation_reason: Option<String>,
}
impl SchemaEnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_deprecated: false,
            deprecation_reason: None,
        }
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
}
