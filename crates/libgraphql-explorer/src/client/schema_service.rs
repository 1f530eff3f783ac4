use crate::client::GraphQLClient;
use crate::client::GraphQLRequest;
use crate::client::HttpExecutor;
use crate::client::SchemaCache;
use crate::introspection::INTROSPECTION_OPERATION_NAME;
use crate::introspection::INTROSPECTION_QUERY;
use crate::introspection::IntrospectionResponseDecoder;
use crate::schema::SchemaModel;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Introspects endpoints and caches the resulting [`SchemaModel`]s.
pub struct SchemaService<E: HttpExecutor> {
    cache: Arc<SchemaCache>,
    client: Arc<GraphQLClient<E>>,
}
impl<E: HttpExecutor> SchemaService<E> {
    pub fn new(client: GraphQLClient<E>) -> Self {
        Self::with_cache(Arc::new(client), Arc::new(SchemaCache::new()))
    }

    pub fn with_cache(client: Arc<GraphQLClient<E>>, cache: Arc<SchemaCache>) -> Self {
        Self {
            cache,
            client,
        }
    }

    pub fn cache(&self) -> &Arc<SchemaCache> {
        &self.cache
    }

    pub fn cached_schema(&self, endpoint: &str) -> Option<Arc<SchemaModel>> {
        self.cache.get(endpoint)
    }

    /// Run the introspection query against `endpoint` and cache the decoded
    /// schema.
    ///
    /// Returns `None` (leaving the cache untouched) when the server reports
    /// errors, returns no data, or returns data that does not decode.
    pub async fn introspect(
        &self,
        endpoint: &str,
        headers: &IndexMap<String, String>,
    ) -> Option<Arc<SchemaModel>> {
        log::info!("Starting schema introspection for endpoint: {endpoint}");
        let request = GraphQLRequest::new(INTROSPECTION_QUERY)
            .with_operation_name(INTROSPECTION_OPERATION_NAME);
        let response = self.client.execute(endpoint, &request, headers).await;

        if let Some(errors) = response.errors.as_ref().filter(|errors| !errors.is_empty()) {
            log::warn!(
                "Introspection of {endpoint} returned errors: {}",
                errors.iter()
                    .map(|error| error.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            );
            return None;
        }
        let Some(data) = response.data else {
            log::warn!("Introspection of {endpoint} returned null data.");
            return None;
        };

        let schema = match IntrospectionResponseDecoder::decode(&data) {
            Ok(schema) => Arc::new(schema),
            Err(err) => {
                log::error!("Failed to decode introspection result from {endpoint}: {err}");
                return None;
            },
        };
        self.cache.insert(endpoint, schema.clone());
        log::info!("Introspected and cached schema for {endpoint}.");
        Some(schema)
    }
}
impl<E: HttpExecutor + 'static> SchemaService<E> {
    /// Run [`SchemaService::introspect`] as a task on the current tokio
    /// runtime and deliver its result on the returned channel.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_introspection(
        &self,
        endpoint: impl Into<String>,
        headers: IndexMap<String, String>,
    ) -> oneshot::Receiver<Option<Arc<SchemaModel>>> {
        let (sender, receiver) = oneshot::channel();
        let service = self.clone();
        let endpoint = endpoint.into();
        tokio::spawn(async move {
            let schema = service.introspect(&endpoint, &headers).await;
            if sender.send(schema).is_err() {
                log::debug!("Introspection result for {endpoint} was no longer awaited.");
            }
        });
        receiver
    }
}
impl<E: HttpExecutor> std::clone::Clone for SchemaService<E> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            client: self.client.clone(),
        }
    }
}
