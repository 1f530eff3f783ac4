use crate::client::HttpRequest;
use crate::client::HttpResponse;
use std::future::Future;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Performs HTTP exchanges on behalf of a
/// [`GraphQLClient`](crate::client::GraphQLClient).
///
/// Transport, TLS, authentication and retries are entirely up to the
/// implementation. A non-2xx status is not an error: the response is
/// returned and its body is interpreted as a GraphQL response.
pub trait HttpExecutor: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, BoxError>> + Send;
}
