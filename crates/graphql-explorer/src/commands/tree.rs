use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::selection_session::SelectionArgs;
use libgraphql_explorer::sync::TextSurface;

#[derive(Debug, clap::Args)]
pub(crate) struct TreeCmd {
    #[command(flatten)]
    selection: SelectionArgs,

    #[arg(
        default_value_t=3,
        help="Show every node up to this many path segments (root marker \
             included). Checked nodes are always shown in full; other \
             collapsed nodes end in `+`.",
        long,
    )]
    expand_depth: usize,

    #[arg(
        help="Also print the query text for the current selection below the \
             tree.",
        long,
    )]
    with_query: bool,
}

#[inherent::inherent]
impl RunnableCommand for TreeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_output(self.selection.open_session().map(|mut sync| {
            sync.expand_to_depth(self.expand_depth);
            let rendered = sync.tree().render();
            if self.with_query {
                format!("{rendered}\n\n{}", sync.surface().text())
            } else {
                rendered
            }
        }))
    }
}
