use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::shared_args::SchemaArgs;
use anyhow::Context;
use libgqlslice::closure::slice_query;
use libgqlslice::file_reader;
use libgqlslice::source_extract;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct QueryCmd {
    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(
        help="A `.graphql`/`.gql` file holding the operation, or any other \
             source file containing a gql`...` or graphql`...` literal.",
        name="SOURCE_FILE",
    )]
    source_file: PathBuf,
}
impl QueryCmd {
    fn slice(&self) -> anyhow::Result<Vec<String>> {
        let index = self.schema.load()?;

        let content = file_reader::read_content(self.source_file.as_path())
            .with_context(|| format!("Failed to read {:#?}", self.source_file))?;
        let query_src = source_extract::query_text(self.source_file.as_path(), content.as_str())
            .with_context(|| format!(
                "No GraphQL query or mutation found in {:#?}",
                self.source_file,
            ))?;
        log::debug!("Slicing query:\n{query_src}");

        Ok(slice_query(&index, query_src)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for QueryCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.slice() {
            Ok(fragments) => CommandResult::stdout(format_args!("{}", fragments.join("\n"))),
            Err(err) => CommandResult::error(err),
        }
    }
}
