pub mod command;
pub mod naming;
pub mod provisioner;
pub mod roster;

pub use crate::domain::model::{RecordOutcome, RepoTarget, RosterRecord};
pub use crate::domain::ports::{CommandRunner, ConfigProvider};
pub use crate::utils::error::Result;
