use crate::{
    core::prune_candidates,
    errors::{ClipError, Context, Result},
    git::{load_refs, load_tracked, Git, RefSource, RemoteBranchDeleter},
};
use clap::Args;
use dialoguer::Confirm;

/// Clip remote branches that are no longer used locally
#[derive(Debug, Args)]
pub struct Prune {
    /// The remote to clip branches from, defaults to `clip.remote` or origin
    pub remote: Option<String>,

    /// Don't ask before deleting remote branches
    #[arg(short, long)]
    pub force: bool,

    /// Only prune branches with this prefix, `-p thrawn` prunes `thrawn/dev` and `thrawn/clip`
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Only list the branches that would be deleted
    #[arg(long)]
    pub dry_run: bool,
}

/// Names of the branches on `remote` that nothing local refers to, sorted
pub fn list_candidates<S: RefSource + ?Sized>(
    source: &S,
    remote: &str,
    prefix: Option<&str>,
) -> Result<Vec<String>> {
    let refs = load_refs(source)?;
    let tracked = load_tracked(source)?;
    let candidates = prune_candidates(remote, &refs, &tracked, prefix)?;
    Ok(candidates.into_iter().map(|b| b.name.clone()).collect())
}

/// Delete every candidate `confirm` agrees to; stops at the first failed deletion
pub fn clip_remote<S, D, F>(
    source: &S,
    deleter: &D,
    remote: &str,
    prefix: Option<&str>,
    mut confirm: F,
) -> Result<Vec<String>>
where
    S: RefSource + ?Sized,
    D: RemoteBranchDeleter + ?Sized,
    F: FnMut(&str, &str) -> Result<bool>,
{
    let mut deleted = Vec::new();
    for branch in list_candidates(source, remote, prefix)? {
        if !confirm(remote, &branch)? {
            log::debug!("Keeping {}/{}", remote, branch);
            continue;
        }

        println!("Deleting {}/{}..", remote, branch);
        deleter
            .delete_remote_branch(remote, &branch)
            .context(&format!("deleting {}/{}", remote, branch))?;
        log::info!("Deleted {}/{}", remote, branch);
        deleted.push(branch);
    }
    Ok(deleted)
}

fn ask(remote: &str, branch: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("Delete Remote Branch '{}/{}'", remote, branch))
        .default(true)
        .interact()
        .map_err(|e| ClipError::Prompt(e.to_string()))
}

impl Prune {
    pub fn execute(&self, git: Git) -> Result<()> {
        let remote = self
            .remote
            .clone()
            .unwrap_or_else(|| git.config.clip.default_remote.clone());
        let prefix = self.prefix.as_deref().or(git.config.clip.prefix.as_deref());

        if self.dry_run {
            for branch in list_candidates(&git.cli, &remote, prefix)? {
                println!("{}/{}", remote, branch);
            }
            return Ok(());
        }

        let deleted = if self.force {
            clip_remote(&git.cli, &git, &remote, prefix, |_, _| Ok(true))?
        } else {
            clip_remote(&git.cli, &git, &remote, prefix, ask)?
        };
        log::info!("Clipped {} branches from {}", deleted.len(), remote);
        Ok(())
    }
}
