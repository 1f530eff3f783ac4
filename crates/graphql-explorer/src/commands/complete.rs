use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::schema_file;
use libgraphql_explorer::query_text::CompletionProvider;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CompleteCmd {
    #[arg(
        help="Path to a saved introspection result (JSON).",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Query text file being edited, or `-` to read from stdin.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,

    #[arg(
        help="Byte offset of the cursor. Defaults to the end of the text.",
        long,
    )]
    cursor: Option<usize>,

    #[arg(
        help="Print each suggestion as a JSON object with its insert text.",
        long,
    )]
    json: bool,
}

#[inherent::inherent]
impl RunnableCommand for CompleteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_output(self.completions())
    }
}
impl CompleteCmd {
    fn completions(&self) -> anyhow::Result<String> {
        let schema = schema_file::load_schema(&self.schema)?;
        let text = schema_file::read_query_text(&self.query_file)?;
        let cursor = self.cursor.unwrap_or(text.len());
        let completions = CompletionProvider::new(&schema).completions(&text, cursor);

        log::debug!("Offering {} completions at byte {cursor}.", completions.len());
        if self.json {
            return Ok(serde_json::to_string_pretty(&completions)?);
        }
        Ok(completions.iter()
            .map(|completion| completion.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
