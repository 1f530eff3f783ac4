mod decode_error;
mod introspection_query;
mod introspection_response_decoder;

pub use decode_error::DecodeError;
pub use introspection_query::INTROSPECTION_OPERATION_NAME;
pub use introspection_query::INTROSPECTION_QUERY;
pub use introspection_response_decoder::IntrospectionResponseDecoder;
