use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("Introspection payload is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Introspection query type has no name")]
    MissingQueryType,

    #[error("Introspection payload has no `__schema` object")]
    MissingSchema,
}
