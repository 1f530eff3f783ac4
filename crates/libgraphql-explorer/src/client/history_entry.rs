use crate::query_text::ast;
use std::time::SystemTime;

/// One executed GraphQL request as kept by a
/// [`HistoryStore`](crate::client::HistoryStore).
///
/// Variables, response data and response errors are stored as JSON text.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub endpoint: String,
    pub execution_time_ms: Option<u64>,

    /// Assigned by [`HistoryStore::add`](crate::client::HistoryStore::add).
    pub id: u64,

    pub operation_name: Option<String>,
    pub query: String,
    pub response_data: Option<String>,
    pub response_errors: Option<String>,
    pub timestamp: SystemTime,
    pub variables: Option<String>,
}
impl HistoryEntry {
    pub fn new(endpoint: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            execution_time_ms: None,
            id: 0,
            operation_name: None,
            query: query.into(),
            response_data: None,
            response_errors: None,
            timestamp: SystemTime::now(),
            variables: None,
        }
    }

    /// The name of the first named operation in the query, falling back to
    /// the request's operation name and then to `"GraphQL Query"`.
    pub fn display_name(&self) -> String {
        let declared_name = ast::parse_query(&self.query).ok().and_then(|document| {
            document.definitions.into_iter().find_map(|def| match def {
                ast::Definition::Operation(ast::OperationDefinition::Mutation(op)) => op.name,
                ast::Definition::Operation(ast::OperationDefinition::Query(op)) => op.name,
                ast::Definition::Operation(ast::OperationDefinition::Subscription(op)) => op.name,
                ast::Definition::Operation(ast::OperationDefinition::SelectionSet(_))
                | ast::Definition::Fragment(_) => None,
            })
        });
        declared_name
            .or_else(|| self.operation_name.clone())
            .unwrap_or_else(|| "GraphQL Query".to_string())
    }

    /// Case-insensitive substring match against the query, endpoint and
    /// operation name.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.query.to_lowercase().contains(&needle)
            || self.endpoint.to_lowercase().contains(&needle)
            || self.operation_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
    }

    pub fn was_successful(&self) -> bool {
        self.response_errors
            .as_deref()
            .is_none_or(|errors| errors.trim().is_empty())
    }
}
