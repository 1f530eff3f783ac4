mod client_config;
mod error_location;
mod graphql_client;
mod graphql_error;
mod graphql_request;
mod graphql_response;
mod history_entry;
mod history_store;
mod http_executor;
mod http_request;
mod http_response;
mod schema_cache;
mod schema_service;

pub use client_config::ClientConfig;
pub use error_location::ErrorLocation;
pub use graphql_client::GraphQLClient;
pub use graphql_error::GraphQLError;
pub use graphql_request::GraphQLRequest;
pub use graphql_response::GraphQLResponse;
pub use history_entry::HistoryEntry;
pub use history_store::HistoryStore;
pub use http_executor::BoxError;
pub use http_executor::HttpExecutor;
pub use http_request::HttpMethod;
pub use http_request::HttpRequest;
pub use http_response::HttpResponse;
pub use schema_cache::SchemaCache;
pub use schema_service::SchemaService;

#[cfg(test)]
mod tests;
