use crate::Cli;
use crate::CommandResult;

/// A subcommand that runs to completion and reports through a
/// [`CommandResult`] rather than printing directly.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
