pub(crate) mod ast;
mod completion_provider;
mod query_parse_error;
mod query_text_parser;
mod query_text_synthesizer;

pub use completion_provider::Completion;
pub use completion_provider::CompletionProvider;
pub use query_parse_error::QueryParseError;
pub use query_text_parser::QueryTextParser;
pub use query_text_synthesizer::QueryTextSynthesizer;

#[cfg(test)]
mod tests;
