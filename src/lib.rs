pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use adapters::{DryRunRunner, ProcessRunner};
pub use core::{provisioner::Provisioner, roster::load_roster};
pub use domain::model::{RecordOutcome, RepoTarget, RosterRecord};
pub use utils::error::{ProvisionError, Result};
