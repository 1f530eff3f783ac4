use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::selection_session::SelectionArgs;
use libgraphql_explorer::sync::TextSurface;

#[derive(Debug, clap::Args)]
pub(crate) struct QueryCmd {
    #[command(flatten)]
    selection: SelectionArgs,
}

#[inherent::inherent]
impl RunnableCommand for QueryCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_output(
            self.selection
                .open_session()
                .map(|sync| sync.surface().text()),
        )
    }
}
