use crate::core::command::GhCommand;
use crate::domain::ports::CommandRunner;
use async_trait::async_trait;

/// Prints each command line without executing it. Every command counts as
/// successful, so both steps of a record are shown.
#[derive(Debug, Clone, Default)]
pub struct DryRunRunner;

#[async_trait]
impl CommandRunner for DryRunRunner {
    async fn run(&self, command: &GhCommand) -> bool {
        tracing::debug!("dry run, not executing {}", command.program);
        println!("$ {}", command);
        true
    }
}
