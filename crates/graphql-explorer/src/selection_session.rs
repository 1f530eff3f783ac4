use crate::schema_file;
use anyhow::Context;
use libgraphql_explorer::FieldPath;
use libgraphql_explorer::FieldSelectionSync;
use libgraphql_explorer::selection::CheckboxState;
use libgraphql_explorer::sync::BufferTextSurface;
use libgraphql_explorer::sync::TextSurface;
use libgraphql_explorer::tree::TreeOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// Flags shared by commands that build up a field selection.
#[derive(Debug, clap::Args)]
pub(crate) struct SelectionArgs {
    #[arg(
        help="Path to a saved introspection result (JSON).",
        long,
        short='s',
    )]
    pub schema: PathBuf,

    #[arg(
        default_value_t=TreeOptions::DEFAULT_MAX_DEPTH,
        help="Longest field path (root marker included) expanded in the \
             selection tree.",
        long,
    )]
    pub max_depth: usize,

    #[arg(
        help="Query text file (or `-` for stdin) whose selections are \
             loaded before any --select is applied.",
        long,
    )]
    pub query_file: Option<PathBuf>,

    #[arg(
        help="Dotted field paths to check, e.g. `Query.user.name`.",
        long,
        value_delimiter=',',
    )]
    pub select: Vec<FieldPath>,
}
impl SelectionArgs {
    /// Build a synchronized tree/store/text session and apply the requested
    /// selections to it.
    pub(crate) fn open_session(&self) -> anyhow::Result<FieldSelectionSync<BufferTextSurface>> {
        let schema = Arc::new(schema_file::load_schema(&self.schema)?);
        let mut sync = FieldSelectionSync::with_options(
            schema,
            Arc::new(BufferTextSurface::new()),
            TreeOptions {
                max_depth: self.max_depth,
            },
        );

        if let Some(query_file) = &self.query_file {
            let text = schema_file::read_query_text(query_file)?;
            sync.surface().set_text_silently(text);
            sync.on_text_changed()
                .with_context(|| format!("Failed to load selections from {query_file:#?}"))?;
            log::debug!("Loaded {} selections from query text.", sync.store().len());
        }

        for path in &self.select {
            sync.set_path_state(path, CheckboxState::Checked)
                .with_context(|| format!("Cannot select `{path}`"))?;
        }
        Ok(sync)
    }
}
