use anyhow::Context;
use libgraphql_explorer::IntrospectionResponseDecoder;
use libgraphql_explorer::SchemaModel;
use std::path::Path;

/// Load a saved introspection result. Both the full response
/// (`{"data": {"__schema": ...}}`) and its bare `data` object are accepted.
pub(crate) fn load_schema(path: &Path) -> anyhow::Result<SchemaModel> {
    log::debug!("Loading introspection result from {path:#?}...");
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {path:#?}"))?;
    let schema = IntrospectionResponseDecoder::decode_str(&json)
        .with_context(|| format!("Failed to decode introspection result in {path:#?}"))?;
    log::debug!(
        "Loaded {} types (query root `{}`).",
        schema.types_len(),
        schema.query_type_name(),
    );
    Ok(schema)
}

/// Read query text from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_query_text(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin())
            .context("Failed to read query text from stdin");
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read query file {path:#?}"))
}
