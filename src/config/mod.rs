use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "create-gh-repos")]
#[command(about = "Automatically create GitHub repositories based on user data.")]
pub struct CliConfig {
    /// The semester code (e.g., fa24, sp25).
    pub semester: String,

    /// Path to the CSV file containing user data.
    #[arg(long = "csv_file", visible_alias = "csv-file")]
    pub csv_file: String,

    /// Starter repository directory whose contents seed each new repository.
    #[arg(long)]
    pub source: String,

    /// The organization or user that will own the repository.
    #[arg(long)]
    pub owner: Option<String>,

    /// GitHub CLI executable.
    #[arg(long, default_value = "gh")]
    pub gh_bin: String,

    /// Print the commands without running them.
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("semester", &self.semester)?;
        validate_path("csv_file", &self.csv_file)?;
        validate_path("source", &self.source)?;
        validate_path("gh_bin", &self.gh_bin)?;

        if let Some(owner) = &self.owner {
            validate_non_empty_string("owner", owner)?;
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn semester(&self) -> &str {
        &self.semester
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn csv_file(&self) -> &str {
        &self.csv_file
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn gh_bin(&self) -> &str {
        &self.gh_bin
    }
}
