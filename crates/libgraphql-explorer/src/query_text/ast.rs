pub use graphql_parser::query::ParseError;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;

pub fn parse_query(query_src: &str) -> Result<Document, ParseError> {
    Ok(graphql_parser::query::parse_query::<String>(query_src)?.into_static())
}
