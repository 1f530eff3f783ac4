use crate::client::GraphQLError;
use serde::de::Error as _;
use serde_json::Map;
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLResponse {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub errors: Option<Vec<GraphQLError>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extensions: Option<Map<String, Value>>,
}
impl GraphQLResponse {
    /// A response carrying nothing but `error`.
    pub fn from_error(error: GraphQLError) -> Self {
        Self {
            data: None,
            errors: Some(vec![error]),
            extensions: None,
        }
    }

    /// Decode a response body. The body must be a JSON object; within it,
    /// each member is extracted independently and malformed members are
    /// treated as absent.
    pub fn from_json_str(body: &str) -> serde_json::Result<Self> {
        let Value::Object(object) = serde_json::from_str::<Value>(body)? else {
            return Err(serde_json::Error::custom(
                "expected the response body to be a JSON object",
            ));
        };
        Ok(Self {
            data: object.get("data").filter(|data| !data.is_null()).cloned(),
            errors: object.get("errors")
                .and_then(Value::as_array)
                .map(|errors| errors.iter().filter_map(GraphQLError::from_json).collect()),
            extensions: object.get("extensions").and_then(Value::as_object).cloned(),
        })
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    pub fn is_successful(&self) -> bool {
        !self.has_errors()
    }
}
