use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_explorer::client::GraphQLRequest;
use libgraphql_explorer::introspection::INTROSPECTION_OPERATION_NAME;
use libgraphql_explorer::introspection::INTROSPECTION_QUERY;

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectionQueryCmd {
    #[arg(
        help="Print the JSON request body to POST instead of the bare query \
             text.",
        long,
    )]
    json: bool,
}

#[inherent::inherent]
impl RunnableCommand for IntrospectionQueryCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        if !self.json {
            return CommandResult::stdout(format_args!("{INTROSPECTION_QUERY}"));
        }

        let request = GraphQLRequest::new(INTROSPECTION_QUERY)
            .with_operation_name(INTROSPECTION_OPERATION_NAME);
        CommandResult::from_output(
            serde_json::to_string_pretty(&request).map_err(anyhow::Error::from),
        )
    }
}
