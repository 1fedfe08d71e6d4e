use crate::errors::Result;

pub trait RemoteBranchDeleter {
    /// Delete `branch` on `remote`, as `git push <remote> --delete <branch>` would
    fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<()>;
}
