use anyhow::Context;
use libgqlslice::SchemaIndex;
use libgqlslice::closure::DEFAULT_DEPTH;
use libgqlslice::closure::DepthBudget;
use libgqlslice::closure::IgnoreSet;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        help="Path to the GraphQL schema (SDL) file to slice from.",
        long,
        short='s',
        value_name="SCHEMA_FILE",
    )]
    schema: PathBuf,
}
impl SchemaArgs {
    pub(crate) fn load(&self) -> anyhow::Result<SchemaIndex> {
        log::debug!("Loading schema from {:#?}...", self.schema);
        let index = SchemaIndex::builder()
            .load_file(self.schema.as_path())
            .and_then(|builder| builder.build())
            .with_context(|| format!("Failed to load schema {:#?}", self.schema))?;
        log::debug!("Loaded {} types.", index.all_types().len());
        Ok(index)
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct ClosureArgs {
    #[arg(
        default_value_t=DEFAULT_DEPTH,
        help="Maximum number of types to expand over the whole traversal.",
        long,
        short='d',
    )]
    depth: u32,

    #[arg(
        help="Path to a file listing type names (one per line) that must \
             never be expanded.",
        long,
        short='i',
        value_name="IGNORED_FILE",
    )]
    ignored: Option<PathBuf>,
}
impl ClosureArgs {
    pub(crate) fn depth(&self) -> DepthBudget {
        DepthBudget::new(self.depth)
    }

    pub(crate) fn load_ignored(&self) -> anyhow::Result<IgnoreSet> {
        let Some(ignored_path) = &self.ignored else {
            return Ok(IgnoreSet::default());
        };
        let ignored = IgnoreSet::from_file(ignored_path)
            .with_context(|| format!("Failed to load ignored types {ignored_path:#?}"))?;
        log::info!(
            "Loaded {} ignored types ({} lines) from {ignored_path:#?}.",
            ignored.len(),
            ignored.line_count(),
        );
        Ok(ignored)
    }
}
