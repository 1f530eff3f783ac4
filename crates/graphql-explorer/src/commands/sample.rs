use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::schema_file;
use libgraphql_explorer::SampleDataSynthesizer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SampleCmd {
    #[arg(
        help="Path to a saved introspection result (JSON).",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Type whose fields the sample operation selects. Defaults to \
             the schema's query root.",
        long,
    )]
    root: Option<String>,

    #[arg(
        default_value_t=2,
        help="Number of selection-set levels to expand.",
        long,
    )]
    max_depth: usize,

    #[arg(
        help="Print sample variables (JSON) for this input object type \
             instead of a sample operation.",
        long,
        value_name="INPUT_TYPE",
    )]
    variables: Option<String>,

    #[arg(
        help="Seed for the numbers in sample variables. Output varies \
             between runs when omitted.",
        long,
    )]
    seed: Option<u64>,
}

#[inherent::inherent]
impl RunnableCommand for SampleCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_output(self.sample())
    }
}
impl SampleCmd {
    fn sample(&self) -> anyhow::Result<String> {
        let schema = schema_file::load_schema(&self.schema)?;
        let synthesizer = SampleDataSynthesizer::new(&schema);

        if let Some(input_type) = &self.variables {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            return Ok(synthesizer.generate_sample_variables_json(input_type, &mut rng)?);
        }

        let root = self.root.as_deref().unwrap_or(schema.query_type_name());
        let sample = synthesizer.generate_sample_query(root, self.max_depth);
        if sample.is_empty() {
            anyhow::bail!("The schema defines no type named `{root}`");
        }
        Ok(sample)
    }
}
