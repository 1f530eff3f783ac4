use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueryParseError {
    #[error("Error parsing query text: {0}")]
    Syntax(String),
}
impl std::convert::From<graphql_parser::query::ParseError> for QueryParseError {
    fn from(err: graphql_parser::query::ParseError) -> Self {
        Self::Syntax(err.to_string())
    }
}
