use crate::{
    core::merge_branch_detail,
    errors::{Context, Result},
    git::{
        ahead_behind, load_refs, load_tracked, remote_status, CommitLog, Git, RefSource,
        RemoteStatus,
    },
    model::DetailKey,
};
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct Show {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteReport {
    pub reference: String,
    pub sha: String,
    pub status: RemoteStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchReport {
    pub key: String,
    pub name: String,
    pub reference: String,
    pub sha: String,
    /// Commits ahead of and behind the trunk, none for the trunk itself
    pub ahead_behind: Option<(usize, usize)>,
    pub tracked_remote: Option<String>,
    pub remotes: Vec<RemoteReport>,
}

/// Reconcile local and remote branches, trunk first then by name
pub fn branch_report<S, L>(source: &S, log: &L) -> Result<Vec<BranchReport>>
where
    S: RefSource + ?Sized,
    L: CommitLog + ?Sized,
{
    let tracked = load_tracked(source)?;
    let refs = load_refs(source)?;
    let details = merge_branch_detail(&refs, &tracked).context("merging branch detail")?;

    let trunk_sha = details.get(&DetailKey::Trunk).map(|trunk| trunk.sha.as_str());
    if trunk_sha.is_none() {
        log::warn!("No main, master or trunk branch found, not counting commits against it");
    }

    let mut report = Vec::with_capacity(details.len());
    for (key, detail) in &details {
        let follow = match (trunk_sha, key) {
            (Some(trunk), DetailKey::Named(_)) => Some(ahead_behind(log, trunk, &detail.sha)?),
            _ => None,
        };

        let mut remotes = Vec::with_capacity(detail.remotes.len());
        for remote in &detail.remotes {
            remotes.push(RemoteReport {
                reference: remote.reference.clone(),
                sha: remote.sha.clone(),
                status: remote_status(log, &detail.sha, &remote.sha)?,
            });
        }

        report.push(BranchReport {
            key: key.to_string(),
            name: detail.name.clone(),
            reference: detail.reference.clone(),
            sha: detail.sha.clone(),
            ahead_behind: follow,
            tracked_remote: detail.tracked.and_then(|t| t.remote.clone()),
            remotes,
        });
    }
    Ok(report)
}

pub fn report_to_string(report: &[BranchReport]) -> String {
    let mut output = String::default();
    for branch in report {
        output.push_str(&branch.name);
        if let Some((ahead, behind)) = branch.ahead_behind {
            output.push_str(&format!(" ({}/{})", ahead, behind));
        }
        if let Some(remote) = &branch.tracked_remote {
            output.push_str(&format!(" [{}]", remote));
        }
        output.push('\n');

        for remote in &branch.remotes {
            output.push_str("     ");
            output.push_str(&remote.reference);
            match remote.status {
                RemoteStatus::InSync => {}
                RemoteStatus::Behind(n) => output.push_str(&format!(" is {} commits behind", n)),
                RemoteStatus::Ahead(n) => output.push_str(&format!(" is {} commits ahead", n)),
            }
            output.push('\n');
        }
    }
    output
}

impl Show {
    pub fn execute(&self, git: Git) -> Result<()> {
        let report = branch_report(&git.cli, &git)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", report_to_string(&report));
        }
        Ok(())
    }
}
