use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::shared_args::ClosureArgs;
use crate::commands::shared_args::SchemaArgs;
use libgqlslice::closure::FieldSlice;
use libgqlslice::closure::slice_field;

#[derive(Debug, clap::Args)]
pub(crate) struct FieldCmd {
    #[command(flatten)]
    closure: ClosureArgs,

    #[arg(
        help="The root field to slice, as `<query|mutation> <field_name>` \
             (for example \"mutation create_job\").",
        name="FIELD_PATH",
    )]
    field_path: String,

    #[command(flatten)]
    schema: SchemaArgs,
}
impl FieldCmd {
    fn slice(&self) -> anyhow::Result<FieldSlice> {
        let index = self.schema.load()?;
        let ignored = self.closure.load_ignored()?;
        Ok(slice_field(
            &index,
            self.field_path.as_str(),
            self.closure.depth(),
            &ignored,
        )?)
    }
}

#[inherent::inherent]
impl RunnableCommand for FieldCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.slice() {
            Ok(FieldSlice { fragments, signature }) => CommandResult::stdout(format_args!(
                "{signature}\n\n-------\n\n{}",
                fragments.join("\n"),
            )),
            Err(err) => CommandResult::error(err),
        }
    }
}
