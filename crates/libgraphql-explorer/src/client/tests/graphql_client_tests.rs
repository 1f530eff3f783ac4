use crate::client::ClientConfig;
use crate::client::GraphQLClient;
use crate::client::GraphQLRequest;
use crate::client::HistoryStore;
use crate::client::HttpMethod;
use crate::client::tests::fake_http_executor::FakeHttpExecutor;
use indexmap::IndexMap;
use serde_json::Value;
use serde_json::json;
use std::time::Duration;

const ENDPOINT: &str = "https://api.example.com/graphql";

fn no_headers() -> IndexMap<String, String> {
    IndexMap::new()
}

#[tokio::test]
async fn posts_json_with_merged_headers() {
    let executor = FakeHttpExecutor::replying(200, r#"{"data": {"ok": true}}"#);
    let requests = executor.requests.clone();
    let client = GraphQLClient::with_config(
        executor,
        ClientConfig::default()
            .with_header("Authorization", "Bearer default")
            .with_header("X-Trace", "1")
            .with_timeout(Duration::from_secs(5)),
    );
    let headers = IndexMap::from([
        ("Authorization".to_string(), "Bearer call".to_string()),
    ]);

    let response = client.execute(
        ENDPOINT,
        &GraphQLRequest::new("{ ok }").with_operation_name("Ok"),
        &headers,
    ).await;

    assert!(response.is_successful());
    assert_eq!(response.data, Some(json!({ "ok": true })));

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, ENDPOINT);
    assert_eq!(request.timeout, Duration::from_secs(5));
    assert_eq!(request.body.as_deref(), Some(r#"{"query":"{ ok }","operationName":"Ok"}"#));
    let headers: Vec<(&str, &str)> =
        request.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
    assert_eq!(headers, vec![
        ("Content-Type", "application/json"),
        ("Accept", "application/json"),
        ("Authorization", "Bearer call"),
        ("X-Trace", "1"),
    ]);
}

#[tokio::test]
async fn transport_failures_become_synthetic_errors() {
    let client = GraphQLClient::new(FakeHttpExecutor::failing("connection refused"));

    let response = client.execute(ENDPOINT, &GraphQLRequest::new("{ ok }"), &no_headers()).await;

    assert_eq!(response.data, None);
    let errors = response.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "GraphQL execution failed: connection refused");
}

#[tokio::test]
async fn blank_bodies_report_the_status() {
    let client = GraphQLClient::new(FakeHttpExecutor::replying(502, "  \n"));

    let response = client.execute(ENDPOINT, &GraphQLRequest::new("{ ok }"), &no_headers()).await;

    let error = &response.errors.unwrap()[0];
    assert_eq!(error.message, "Empty response from server (HTTP 502)");
    assert_eq!(
        error.extensions.as_ref().and_then(|extensions| extensions.get("statusCode")),
        Some(&json!(502)),
    );
}

#[tokio::test]
async fn unparseable_bodies_keep_a_snippet() {
    let body = format!("<html>{}</html>", "x".repeat(600));
    let client = GraphQLClient::new(FakeHttpExecutor::replying(500, &body));

    let response = client.execute(ENDPOINT, &GraphQLRequest::new("{ ok }"), &no_headers()).await;

    let error = &response.errors.unwrap()[0];
    assert!(error.message.starts_with("Failed to parse GraphQL response: "));
    let snippet = error.extensions
        .as_ref()
        .and_then(|extensions| extensions.get("responseBody"))
        .and_then(Value::as_str)
        .unwrap();
    assert_eq!(snippet.chars().count(), 500);
    assert!(snippet.starts_with("<html>xxx"));
}

#[tokio::test]
async fn non_object_bodies_are_rejected() {
    let client = GraphQLClient::new(FakeHttpExecutor::replying(200, "[1, 2]"));

    let response = client.execute(ENDPOINT, &GraphQLRequest::new("{ ok }"), &no_headers()).await;

    assert!(response.has_errors());
    assert!(response.errors.unwrap()[0].message.starts_with("Failed to parse GraphQL response"));
}

#[tokio::test]
async fn error_statuses_with_graphql_bodies_are_passed_through() {
    let client = GraphQLClient::new(FakeHttpExecutor::replying(
        400,
        r#"{"errors": [{"message": "Cannot query field \"nope\" on type \"Query\"."}]}"#,
    ));

    let response = client.execute(ENDPOINT, &GraphQLRequest::new("{ nope }"), &no_headers()).await;

    assert_eq!(
        response.errors.unwrap()[0].message,
        "Cannot query field \"nope\" on type \"Query\".",
    );
}

#[tokio::test]
async fn recorded_executions_land_in_history() {
    let client = GraphQLClient::new(FakeHttpExecutor::replying(
        200,
        r#"{"data": {"user": {"name": "Ada"}}}"#,
    ));
    let history = HistoryStore::new();
    let request = GraphQLRequest::new("query GetUser($id: ID!) { user(id: $id) { name } }")
        .with_operation_name("GetUser")
        .with_variables(json!({ "id": "1" }));

    let response = client.execute_recorded(ENDPOINT, &request, &no_headers(), &history).await;
    assert!(response.is_successful());

    let entries = history.entries();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.id, 1);
    assert_eq!(entry.endpoint, ENDPOINT);
    assert_eq!(entry.operation_name.as_deref(), Some("GetUser"));
    assert_eq!(entry.variables.as_deref(), Some(r#"{"id":"1"}"#));
    assert_eq!(entry.response_data.as_deref(), Some(r#"{"user":{"name":"Ada"}}"#));
    assert_eq!(entry.response_errors, None);
    assert!(entry.execution_time_ms.is_some());
    assert!(entry.was_successful());
    assert_eq!(entry.display_name(), "GetUser");
}

#[tokio::test]
async fn recorded_failures_keep_their_errors() {
    let client = GraphQLClient::new(FakeHttpExecutor::failing("timed out"));
    let history = HistoryStore::new();

    client.execute_recorded(ENDPOINT, &GraphQLRequest::new("{ ok }"), &no_headers(), &history).await;

    let entry = history.entry(1).unwrap();
    assert!(!entry.was_successful());
    assert!(entry.response_errors.unwrap().contains("GraphQL execution failed: timed out"));
    assert_eq!(entry.response_data, None);
}
