mod hint;
mod schema_files;
mod validate;

use crate::Cli;
use crate::CommandResult;
use hint::HintCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-autocomplete")]
pub(crate) enum CommandEnum {
    /// Compute ranked completions at a cursor position.
    Hint(Box<HintCmd>),

    /// Load and validate one or more GraphQL schema files.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Hint(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
