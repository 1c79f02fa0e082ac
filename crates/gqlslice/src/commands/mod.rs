mod field;
mod query;
mod selection;
mod shared_args;
mod type_closure;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use field::FieldCmd;
use query::QueryCmd;
use selection::SelectionCmd;
use type_closure::TypeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlslice")]
pub(crate) enum CommandEnum {
    /// Print the schema fragments a root field's arguments and return type
    /// need, e.g. `gqlslice field --schema schema.graphql "query job_job"`.
    Field(Box<FieldCmd>),

    /// Print exactly the schema a query or mutation selects, found in a
    /// `.graphql`/`.gql` file or the first gql`...` literal of a source file.
    Query(Box<QueryCmd>),

    /// Show the selection tree recovered from loosely formatted selection
    /// text.
    Selection(Box<SelectionCmd>),

    /// Print a type's complete definition and everything it references.
    Type(Box<TypeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Field(cmd) => cmd.run(cli).await,
            Self::Query(cmd) => cmd.run(cli).await,
            Self::Selection(cmd) => cmd.run(cli).await,
            Self::Type(cmd) => cmd.run(cli).await,
        }
    }
}
