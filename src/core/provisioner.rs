use crate::core::command::GhCommand;
use crate::core::naming::{full_repo_name, repo_name};
use crate::domain::model::{RecordOutcome, RepoTarget, RosterRecord};
use crate::domain::ports::{CommandRunner, ConfigProvider};

/// Drives repository creation for a roster, one record at a time.
pub struct Provisioner<R: CommandRunner, C: ConfigProvider> {
    runner: R,
    config: C,
}

impl<R: CommandRunner, C: ConfigProvider> Provisioner<R, C> {
    pub fn new(runner: R, config: C) -> Self {
        Self { runner, config }
    }

    pub fn target_for(&self, record: &RosterRecord) -> RepoTarget {
        let name = repo_name(
            self.config.semester(),
            &record.section_number,
            &record.username,
        );
        let full_name = full_repo_name(self.config.owner(), &name);

        RepoTarget {
            full_name,
            remote: name,
            source_dir: self.config.source().to_string(),
        }
    }

    /// Creates the repository, then grants access only if creation succeeded.
    pub async fn provision(&self, record: &RosterRecord) -> RecordOutcome {
        let target = self.target_for(record);
        let gh = self.config.gh_bin();

        tracing::info!(
            "🔧 {} {} ({}) -> {}",
            record.first_name,
            record.last_name,
            record.username,
            target.full_name
        );

        let create = GhCommand::create_repo(gh, &target);
        if !self.runner.run(&create).await {
            tracing::warn!("Skipping collaborator grant for {}", target.full_name);
            return RecordOutcome::CreationFailed {
                full_name: target.full_name,
            };
        }

        let grant = GhCommand::add_collaborator(gh, &target.full_name, &record.github_username);
        if self.runner.run(&grant).await {
            RecordOutcome::Granted {
                full_name: target.full_name,
            }
        } else {
            RecordOutcome::GrantFailed {
                full_name: target.full_name,
            }
        }
    }

    /// Processes every record in order. A failed record never stops the batch.
    pub async fn run(&self, records: &[RosterRecord]) -> Vec<RecordOutcome> {
        let mut outcomes = Vec::with_capacity(records.len());

        for record in records {
            let outcome = self.provision(record).await;
            tracing::debug!("{}", outcome);
            outcomes.push(outcome);
        }

        outcomes
    }
}
