use crate::errors::{Context, Result};
use serde::Serialize;

pub trait CommitLog {
    /// Commits reachable from `end` but not from `begin`, newest first
    fn log_range(&self, begin: &str, end: &str) -> Result<Vec<String>>;
}

/// Same as [`CommitLog::log_range`] but doesn't ask the repository when both ends are equal
pub fn commits_between<L: CommitLog + ?Sized>(
    log: &L,
    begin: &str,
    end: &str,
) -> Result<Vec<String>> {
    if begin == end {
        return Ok(Vec::new());
    }
    log.log_range(begin, end)
        .context(&format!("listing commits {}..{}", begin, end))
}

/// How many commits `branch` has that `trunk` doesn't, and the other way around
pub fn ahead_behind<L: CommitLog + ?Sized>(
    log: &L,
    trunk: &str,
    branch: &str,
) -> Result<(usize, usize)> {
    let ahead = commits_between(log, trunk, branch)?;
    let behind = commits_between(log, branch, trunk)?;
    Ok((ahead.len(), behind.len()))
}

/// State of a remote branch compared to the local branch it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "commits", rename_all = "snake_case")]
pub enum RemoteStatus {
    InSync,
    /// The remote misses this many local commits
    Behind(usize),
    /// The remote has this many commits we don't have locally
    Ahead(usize),
}

pub fn remote_status<L: CommitLog + ?Sized>(
    log: &L,
    local_sha: &str,
    remote_sha: &str,
) -> Result<RemoteStatus> {
    let behind = commits_between(log, remote_sha, local_sha)?;
    if !behind.is_empty() {
        return Ok(RemoteStatus::Behind(behind.len()));
    }
    let ahead = commits_between(log, local_sha, remote_sha)?;
    if !ahead.is_empty() {
        return Ok(RemoteStatus::Ahead(ahead.len()));
    }
    Ok(RemoteStatus::InSync)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::MockGit;

    #[test]
    fn test_commits_between_same_commit_skips_the_log() {
        let git = MockGit::default();
        let commits = commits_between(&git, "2dc90a3", "2dc90a3").expect("Should succeed");
        assert!(commits.is_empty());
        assert!(git.get_logged_ranges().is_empty());
    }

    #[test]
    fn test_commits_between_asks_the_log() {
        let git = MockGit::default().with_range("aaa", "bbb", &["b2", "b1"]);
        let commits = commits_between(&git, "aaa", "bbb").expect("Should succeed");
        assert_eq!(commits, vec!["b2", "b1"]);
        assert_eq!(
            git.get_logged_ranges(),
            vec![("aaa".to_string(), "bbb".to_string())]
        );
    }

    #[test]
    fn test_commits_between_failure_names_the_range() {
        let git = MockGit::default().set_unavailable();
        let err = commits_between(&git, "aaa", "bbb").unwrap_err();
        assert!(err.to_string().starts_with("listing commits aaa..bbb: "));
    }

    #[test]
    fn test_ahead_behind() {
        let git = MockGit::default()
            .with_range("trunk", "topic", &["t3", "t2", "t1"])
            .with_range("topic", "trunk", &["m1"]);
        assert_eq!(ahead_behind(&git, "trunk", "topic").unwrap(), (3, 1));
        assert_eq!(ahead_behind(&git, "trunk", "trunk").unwrap(), (0, 0));
    }

    #[test]
    fn test_remote_status() {
        let git = MockGit::default()
            .with_range("remote", "local", &["l1", "l2"])
            .with_range("old", "local", &[])
            .with_range("local", "old", &["o1"]);

        assert_eq!(remote_status(&git, "local", "remote").unwrap(), RemoteStatus::Behind(2));
        assert_eq!(remote_status(&git, "local", "old").unwrap(), RemoteStatus::Ahead(1));
        assert_eq!(remote_status(&git, "local", "local").unwrap(), RemoteStatus::InSync);
    }
}
