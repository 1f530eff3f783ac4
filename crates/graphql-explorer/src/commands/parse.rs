use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::schema_file;
use anyhow::Context;
use libgraphql_explorer::QueryTextParser;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        help="Path to a saved introspection result (JSON).",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Query text file to parse, or `-` to read from stdin.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_output(self.selected_paths())
    }
}
impl ParseCmd {
    fn selected_paths(&self) -> anyhow::Result<String> {
        let schema = schema_file::load_schema(&self.schema)?;
        let text = schema_file::read_query_text(&self.query_file)?;
        let paths = QueryTextParser::new(&schema)
            .try_parse(&text)
            .with_context(|| format!("{:#?} is not a valid query document", self.query_file))?;

        log::debug!("Query text selects {} field paths.", paths.len());
        Ok(paths.iter()
            .map(|path| path.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
