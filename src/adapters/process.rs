use crate::core::command::GhCommand;
use crate::domain::ports::CommandRunner;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::process::Command;

/// Runs commands as child processes and waits for each to exit.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &GhCommand) -> bool {
        println!("$ {}", command);

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::error!("Failed to launch {}: {}", command.program, e);
                println!("Error: External program not found.");
                return false;
            }
            Err(e) => {
                tracing::error!("Failed to launch {}: {}", command.program, e);
                println!("❌ Could not run {}: {}", command.program, e);
                return false;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if output.status.success() {
            tracing::debug!("{} exited with {}", command.program, output.status);
            println!("✅ Success: {}", stdout.trim());
            true
        } else {
            tracing::warn!("{} exited with {}", command.program, output.status);
            println!("❌ Command failed ({}). Stderr: {}", output.status, stderr.trim());
            false
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> GhCommand {
        GhCommand::new("sh").arg("-c").arg(script)
    }

    #[test]
    fn test_zero_exit_is_success() {
        let runner = ProcessRunner::new();
        assert!(tokio_test::block_on(runner.run(&sh("echo created"))));
    }

    #[test]
    fn test_non_zero_exit_is_failure() {
        let runner = ProcessRunner::new();
        assert!(!tokio_test::block_on(runner.run(&sh("echo boom >&2; exit 3"))));
    }

    #[tokio::test]
    async fn test_missing_program_is_failure() {
        let runner = ProcessRunner::new();
        let cmd = GhCommand::new("definitely-not-a-real-gh-binary").arg("repo");
        assert!(!runner.run(&cmd).await);
    }
}
