use crate::client::ErrorLocation;
use serde_json::Map;
use serde_json::Value;

/// One entry of a GraphQL response's `errors` list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLError {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub locations: Option<Vec<ErrorLocation>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extensions: Option<Map<String, Value>>,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Lenient decoding of one error object. A missing message becomes
    /// `"Unknown error"` and malformed locations are skipped.
    pub(crate) fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            message: object.get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string(),
            locations: object.get("locations")
                .and_then(Value::as_array)
                .map(|locations| {
                    locations.iter().filter_map(ErrorLocation::from_json).collect()
                }),
            path: object.get("path").and_then(Value::as_array).cloned(),
            extensions: object.get("extensions").and_then(Value::as_object).cloned(),
        })
    }
}
impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
