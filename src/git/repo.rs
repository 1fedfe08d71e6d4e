use crate::errors::{ClipError, Result};
use crate::git::{cli::GitCli, config::Config, CommitLog, RemoteBranchDeleter};
use auth_git2::GitAuthenticator;
use git2::{Oid, PushOptions, RemoteCallbacks, Repository, Sort};

const SHORT_SHA_LEN: usize = 7;

/// Repository the commands run against
pub struct Git {
    repo: Repository,
    pub cli: GitCli,
    pub config: Config,
}

impl Git {
    pub fn open(path: &str) -> Result<Self> {
        let repo = Repository::discover(path)?;
        let workdir = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        let config = Config::from_git(&repo.config()?);
        log::debug!("Opened repository at {}", workdir.display());
        Ok(Self {
            cli: GitCli::new(&workdir),
            config,
            repo,
        })
    }
}

impl CommitLog for Git {
    fn log_range(&self, begin: &str, end: &str) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(Oid::from_str(end)?)?;
        revwalk.hide(Oid::from_str(begin)?)?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let mut id = oid?.to_string();
            id.truncate(SHORT_SHA_LEN);
            commits.push(id);
        }
        Ok(commits)
    }
}

impl RemoteBranchDeleter for Git {
    fn delete_remote_branch(&self, remote_name: &str, branch: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name)?;
        let git_config = self.repo.config()?;
        let auth = GitAuthenticator::default();
        let refspec = format!(":refs/heads/{}", branch);

        log::debug!("Pushing {} to {}", refspec, remote_name);
        let mut rejection = None;
        {
            let mut callbacks = RemoteCallbacks::new();
            callbacks.credentials(auth.credentials(&git_config));
            callbacks.push_update_reference(|reference, status| {
                if let Some(message) = status {
                    rejection = Some(format!("{}: {}", reference, message));
                }
                Ok(())
            });

            let mut push_options = PushOptions::new();
            push_options.remote_callbacks(callbacks);
            remote.push(&[refspec.as_str()], Some(&mut push_options))?;
        }

        match rejection {
            Some(message) => Err(ClipError::Git(format!(
                "Failed to delete {}/{}: {}",
                remote_name, branch, message
            ))),
            None => Ok(()),
        }
    }
}
