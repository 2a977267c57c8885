use crate::core::command::GhCommand;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn semester(&self) -> &str;
    fn owner(&self) -> Option<&str>;
    fn csv_file(&self) -> &str;
    fn source(&self) -> &str;
    fn gh_bin(&self) -> &str;
}

/// Executes one external command to completion.
///
/// Implementations report their own diagnostics and never fail past this
/// boundary: the return value is the only signal the caller gets.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &GhCommand) -> bool;
}
