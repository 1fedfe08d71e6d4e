use crate::errors::{ClipError, Result};
use crate::git::{CommitLog, RefSource, RemoteBranchDeleter};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory stand-in for a repository that records what was asked of it
#[derive(Default)]
pub struct MockGit {
    pub show_ref: String,
    pub branch_config: String,
    pub unavailable: bool,
    pub ranges: HashMap<(String, String), Vec<String>>,
    pub rejected_branches: HashSet<String>,
    pub logged_ranges: Mutex<Vec<(String, String)>>,
    pub deleted_branches: Mutex<Vec<(String, String)>>,
}

impl MockGit {
    pub fn new(show_ref: &str, branch_config: &str) -> Self {
        Self {
            show_ref: show_ref.to_string(),
            branch_config: branch_config.to_string(),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, begin: &str, end: &str, commits: &[&str]) -> Self {
        self.ranges.insert(
            (begin.to_string(), end.to_string()),
            commits.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    pub fn with_rejected_branch(mut self, branch: &str) -> Self {
        self.rejected_branches.insert(branch.to_string());
        self
    }

    pub fn set_unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn get_logged_ranges(&self) -> Vec<(String, String)> {
        self.logged_ranges.lock().unwrap().clone()
    }

    pub fn get_deleted_branches(&self) -> Vec<(String, String)> {
        self.deleted_branches.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(ClipError::Git("not a git repository".to_string()));
        }
        Ok(())
    }
}

impl RefSource for MockGit {
    fn show_ref(&self) -> Result<String> {
        self.check_available()?;
        Ok(self.show_ref.clone())
    }

    fn branch_config(&self) -> Result<String> {
        self.check_available()?;
        Ok(self.branch_config.clone())
    }
}

impl CommitLog for MockGit {
    fn log_range(&self, begin: &str, end: &str) -> Result<Vec<String>> {
        self.check_available()?;
        let key = (begin.to_string(), end.to_string());
        self.logged_ranges.lock().unwrap().push(key.clone());
        Ok(self.ranges.get(&key).cloned().unwrap_or_default())
    }
}

impl RemoteBranchDeleter for MockGit {
    fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.check_available()?;
        if self.rejected_branches.contains(branch) {
            return Err(ClipError::Git(format!(
                "failed to delete {}/{}: rejected",
                remote, branch
            )));
        }
        self.deleted_branches
            .lock()
            .unwrap()
            .push((remote.to_string(), branch.to_string()));
        Ok(())
    }
}
