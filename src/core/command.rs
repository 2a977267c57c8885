use crate::domain::model::RepoTarget;
use std::fmt;

/// Argument vector for one invocation of the GitHub CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl GhCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `gh repo create <full> --private --source=<dir> --push --remote=<alias>`
    pub fn create_repo(program: &str, target: &RepoTarget) -> Self {
        Self::new(program)
            .arg("repo")
            .arg("create")
            .arg(target.full_name.as_str())
            .arg("--private")
            .arg(format!("--source={}", target.source_dir))
            .arg("--push")
            .arg(format!("--remote={}", target.remote))
    }

    /// `gh api --method PUT repos/<full>/collaborators/<handle> -f permission=push`
    pub fn add_collaborator(program: &str, full_name: &str, handle: &str) -> Self {
        Self::new(program)
            .arg("api")
            .arg("--method")
            .arg("PUT")
            .arg(format!("repos/{}/collaborators/{}", full_name, handle))
            .arg("-f")
            .arg("permission=push")
    }
}

impl fmt::Display for GhCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
