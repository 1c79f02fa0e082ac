use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::shared_args::ClosureArgs;
use crate::commands::shared_args::SchemaArgs;
use libgqlslice::closure::slice_type;

#[derive(Debug, clap::Args)]
pub(crate) struct TypeCmd {
    #[command(flatten)]
    closure: ClosureArgs,

    #[command(flatten)]
    schema: SchemaArgs,

    #[arg(help="Name of the type to start from.", name="TYPE_NAME")]
    type_name: String,
}
impl TypeCmd {
    fn slice(&self) -> anyhow::Result<Vec<String>> {
        let index = self.schema.load()?;
        let ignored = self.closure.load_ignored()?;
        Ok(slice_type(
            &index,
            self.type_name.as_str(),
            self.closure.depth(),
            &ignored,
        )?)
    }
}

#[inherent::inherent]
impl RunnableCommand for TypeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.slice() {
            Ok(fragments) => CommandResult::stdout(format_args!("{}", fragments.join("\n"))),
            Err(err) => CommandResult::error(err),
        }
    }
}
