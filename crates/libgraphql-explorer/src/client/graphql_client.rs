use crate::client::ClientConfig;
use crate::client::GraphQLError;
use crate::client::GraphQLRequest;
use crate::client::GraphQLResponse;
use crate::client::HistoryEntry;
use crate::client::HistoryStore;
use crate::client::HttpExecutor;
use crate::client::HttpMethod;
use crate::client::HttpRequest;
use indexmap::IndexMap;
use std::time::Instant;
use std::time::SystemTime;

/// Longest prefix of an unparseable response body kept in the synthetic
/// error's `responseBody` extension.
const RESPONSE_BODY_SNIPPET_CHARS: usize = 500;

/// Sends GraphQL operations over an [`HttpExecutor`].
///
/// [`GraphQLClient::execute`] never fails: transport failures, empty bodies
/// and bodies that are not GraphQL responses are all reported as a
/// [`GraphQLResponse`] carrying a single synthetic error.
#[derive(Debug)]
pub struct GraphQLClient<E: HttpExecutor> {
    config: ClientConfig,
    executor: E,
}
impl<E: HttpExecutor> GraphQLClient<E> {
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, ClientConfig::default())
    }

    pub fn with_config(executor: E, config: ClientConfig) -> Self {
        Self {
            config,
            executor,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn execute(
        &self,
        endpoint: &str,
        request: &GraphQLRequest,
        headers: &IndexMap<String, String>,
    ) -> GraphQLResponse {
        log::info!(
            "Executing GraphQL request against {endpoint} (operation: {}).",
            request.operation_name.as_deref().unwrap_or("<anonymous>"),
        );

        let body = match serde_json::to_string(request) {
            Ok(body) => body,
            Err(err) => return execution_failure(err.to_string()),
        };
        log::debug!("GraphQL request body: {body}");

        let http_request = HttpRequest {
            body: Some(body),
            headers: self.build_headers(headers),
            method: HttpMethod::Post,
            timeout: self.config.timeout,
            url: endpoint.to_string(),
        };
        let http_response = match self.executor.execute(http_request).await {
            Ok(http_response) => http_response,
            Err(err) => {
                log::error!("GraphQL execution against {endpoint} failed: {err}");
                return execution_failure(err.to_string());
            },
        };
        log::info!("GraphQL HTTP response from {endpoint}: status={}.", http_response.status);

        if http_response.body.trim().is_empty() {
            return GraphQLResponse::from_error(
                GraphQLError::new(format!(
                    "Empty response from server (HTTP {})",
                    http_response.status,
                ))
                .with_extension("statusCode", http_response.status),
            );
        }

        GraphQLResponse::from_json_str(&http_response.body).unwrap_or_else(|err| {
            log::error!("Failed to parse GraphQL response from {endpoint}: {err}");
            let snippet: String =
                http_response.body
                    .chars()
                    .take(RESPONSE_BODY_SNIPPET_CHARS)
                    .collect();
            GraphQLResponse::from_error(
                GraphQLError::new(format!("Failed to parse GraphQL response: {err}"))
                    .with_extension("responseBody", snippet),
            )
        })
    }

    /// [`GraphQLClient::execute`], then record the exchange in `history`.
    pub async fn execute_recorded(
        &self,
        endpoint: &str,
        request: &GraphQLRequest,
        headers: &IndexMap<String, String>,
        history: &HistoryStore,
    ) -> GraphQLResponse {
        let started = Instant::now();
        let response = self.execute(endpoint, request, headers).await;
        let elapsed = started.elapsed();

        history.add(HistoryEntry {
            endpoint: endpoint.to_string(),
            execution_time_ms: Some(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)),
            id: 0,
            operation_name: request.operation_name.clone(),
            query: request.query.clone(),
            response_data: response.data.as_ref().map(|data| data.to_string()),
            response_errors: response.errors
                .as_ref()
                .filter(|errors| !errors.is_empty())
                .and_then(|errors| serde_json::to_string(errors).ok()),
            timestamp: SystemTime::now(),
            variables: request.variables.as_ref().map(|variables| variables.to_string()),
        });
        response
    }

    fn build_headers(&self, headers: &IndexMap<String, String>) -> IndexMap<String, String> {
        let mut all_headers = IndexMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ]);
        all_headers.extend(self.config.default_headers.clone());
        all_headers.extend(headers.clone());
        all_headers
    }
}

fn execution_failure(cause: String) -> GraphQLResponse {
    GraphQLResponse::from_error(GraphQLError::new(format!(
        "GraphQL execution failed: {cause}",
    )))
}
