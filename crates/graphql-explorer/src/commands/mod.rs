mod complete;
mod introspection_query;
mod parse;
mod query;
mod sample;
mod tree;

use crate::Cli;
use crate::CommandResult;
use complete::CompleteCmd;
use introspection_query::IntrospectionQueryCmd;
use parse::ParseCmd;
use query::QueryCmd;
use sample::SampleCmd;
use tree::TreeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-explorer")]
pub(crate) enum CommandEnum {
    /// Print the root fields that can be inserted at a cursor position.
    Complete(Box<CompleteCmd>),

    /// Print the introspection query used to discover a server's schema.
    IntrospectionQuery(Box<IntrospectionQueryCmd>),

    /// Print the field paths a query document selects.
    Parse(Box<ParseCmd>),

    /// Print the query text for a set of selected fields.
    Query(Box<QueryCmd>),

    /// Print a sample operation or sample variables for a type.
    Sample(Box<SampleCmd>),

    /// Print the selection tree with the state of every checkbox.
    Tree(Box<TreeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Complete(cmd) => cmd.run(cli).await,
            Self::IntrospectionQuery(cmd) => cmd.run(cli).await,
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Query(cmd) => cmd.run(cli).await,
            Self::Sample(cmd) => cmd.run(cli).await,
            Self::Tree(cmd) => cmd.run(cli).await,
        }
    }
}
