use serde_json::Value;

/// The JSON body of a GraphQL-over-HTTP `POST`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub variables: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub operation_name: Option<String>,
}
impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }
}
