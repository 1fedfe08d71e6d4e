use crate::errors::{ClipError, Context, Result};
use crate::model::{BranchReferenceMap, TrackedBranchMap};
use crate::parser::{parse_branch_refs, parse_tracked_branches};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where the raw branch listings come from
pub trait RefSource {
    /// Output of `git show-ref`
    fn show_ref(&self) -> Result<String>;
    /// Output of `git config --get-regexp ^branch\.`
    fn branch_config(&self) -> Result<String>;
}

/// Runs the `git` binary inside a working directory
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: &Path) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
        }
    }

    fn run_command(&self, args: &[&str]) -> Result<std::process::Output> {
        log::debug!("Running: git {}", args.join(" "));
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| ClipError::Git(format!("Failed to execute git command: {}", e)))
    }

    fn stdout_of(&self, args: &[&str]) -> Result<String> {
        let output = self.run_command(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClipError::Git(format!(
                "'git {}' failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl RefSource for GitCli {
    fn show_ref(&self) -> Result<String> {
        self.stdout_of(&["show-ref"])
    }

    fn branch_config(&self) -> Result<String> {
        let args = ["config", "--get-regexp", r"^branch\."];
        let output = self.run_command(&args)?;
        // Exit code 1 only means no branch has any config yet
        if output.status.code() == Some(1) {
            return Ok(String::new());
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClipError::Git(format!(
                "'git {}' failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// List local and remote branches
pub fn load_refs<S: RefSource + ?Sized>(source: &S) -> Result<BranchReferenceMap> {
    let output = source.show_ref().context("listing branch refs")?;
    let refs = parse_branch_refs(&output);
    log::debug!(
        "Found {} local branches and {} remotes",
        refs.local().len(),
        refs.remotes().count()
    );
    Ok(refs)
}

/// List the upstream of every tracked local branch
pub fn load_tracked<S: RefSource + ?Sized>(source: &S) -> Result<TrackedBranchMap> {
    let output = source.branch_config().context("listing tracked branches")?;
    let tracked = parse_tracked_branches(&output);
    log::debug!("Found {} tracked branches", tracked.len());
    Ok(tracked)
}
