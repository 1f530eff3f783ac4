use indexmap::IndexMap;
use std::time::Duration;

/// Settings applied to every request a
/// [`GraphQLClient`](crate::client::GraphQLClient) sends.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Sent with every request. Per-call headers with the same name win.
    pub default_headers: IndexMap<String, String>,
    pub timeout: Duration,
}
impl ClientConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
impl std::default::Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_headers: IndexMap::new(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}
