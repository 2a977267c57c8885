use serde::Deserialize;
use std::fmt;

/// One student row from the roster CSV.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterRecord {
    #[serde(rename = "last name")]
    pub last_name: String,
    #[serde(rename = "first name")]
    pub first_name: String,
    #[serde(rename = "username")]
    pub username: String,
    #[serde(rename = "github username")]
    pub github_username: String,
    #[serde(rename = "section number")]
    pub section_number: String,
}

/// Repository derived for a single roster record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    pub full_name: String,
    pub source_dir: String,
    pub remote: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Granted { full_name: String },
    GrantFailed { full_name: String },
    CreationFailed { full_name: String },
}

impl RecordOutcome {
    pub fn full_name(&self) -> &str {
        match self {
            RecordOutcome::Granted { full_name }
            | RecordOutcome::GrantFailed { full_name }
            | RecordOutcome::CreationFailed { full_name } => full_name,
        }
    }
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordOutcome::Granted { full_name } => {
                write!(f, "{}: created, collaborator granted", full_name)
            }
            RecordOutcome::GrantFailed { full_name } => {
                write!(f, "{}: created, collaborator grant failed", full_name)
            }
            RecordOutcome::CreationFailed { full_name } => {
                write!(f, "{}: creation failed, grant skipped", full_name)
            }
        }
    }
}
