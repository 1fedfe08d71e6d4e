use crate::{
    errors::{ClipError, Result},
    model::{
        Branch, BranchDetail, BranchDetailMap, BranchReferenceMap, DetailKey, Owner,
        TrackedBranchMap,
    },
};

/// Name of the upstream branch from a tracked `merge` value
///
/// The tracking parser already dropped the `refs/heads/` prefix, so the value is
/// used as is. Stripping again would turn an upstream named `heads/x` into `x`.
pub fn remote_branch_name(merge: &str) -> Result<&str> {
    if merge.is_empty() {
        return Err(ClipError::UnresolvableMerge(merge.to_string()));
    }
    Ok(merge)
}

/// Attach the tracking config of the branch, and the upstream branch itself when
/// it has a different name than the local one.
fn find_tracked_branch<'a>(
    detail: &mut BranchDetail<'a>,
    refs: &'a BranchReferenceMap,
    tracked: &'a TrackedBranchMap,
) -> Result<()> {
    let Some(tracked_branch) = tracked.get(&detail.name) else {
        return Ok(());
    };
    detail.tracked = Some(tracked_branch);

    let Some(merge) = &tracked_branch.merge else {
        return Ok(());
    };
    let upstream = remote_branch_name(merge)?;
    // Same name: the remote scan below picks it up
    if upstream == detail.name {
        return Ok(());
    }

    let Some(remote) = &tracked_branch.remote else {
        return Ok(());
    };
    match refs.get(&Owner::Remote(remote.clone()), upstream) {
        Some(branch) => {
            detail.add_remote(branch);
        }
        None => log::debug!(
            "{} tracks {}/{} which is not in the ref listing",
            detail.name,
            remote,
            upstream
        ),
    }
    Ok(())
}

/// A branch with the same name on any of the remotes is assumed to be the same branch
fn find_remote_branches<'a>(detail: &mut BranchDetail<'a>, refs: &'a BranchReferenceMap) {
    for (_, branches) in refs.remotes() {
        if let Some(branch) = branches.get(&detail.name) {
            detail.add_remote(branch);
        }
    }
}

/// Collect, for every local branch, its upstream and the remote branches sharing its name
pub fn merge_branch_detail<'a>(
    refs: &'a BranchReferenceMap,
    tracked: &'a TrackedBranchMap,
) -> Result<BranchDetailMap<'a>> {
    let mut result = BranchDetailMap::new();

    for (name, branch) in refs.local() {
        let mut detail = BranchDetail::new(branch);

        find_tracked_branch(&mut detail, refs, tracked)?;
        find_remote_branches(&mut detail, refs);

        result.insert(DetailKey::for_branch(name), detail);
    }

    log::debug!("Merged {} local branches", result.len());
    Ok(result)
}

pub fn exists_locally(needle: &Branch, refs: &BranchReferenceMap) -> bool {
    refs.local().contains_key(&needle.name)
}

pub fn exists_remotely(needle: &Branch, remote: &str, refs: &BranchReferenceMap) -> bool {
    refs.remote(remote)
        .is_some_and(|branches| branches.contains_key(&needle.name))
}

/// True if a local branch of the same name tracks `remote`
pub fn is_tracked(needle: &Branch, remote: &str, tracked: &TrackedBranchMap) -> bool {
    tracked
        .get(&needle.name)
        .is_some_and(|branch| branch.remote.as_deref() == Some(remote))
}

/// Remote branches nobody works on locally anymore
///
/// Skips `HEAD`, branches that exist locally, branches tracked from `remote`
/// and, when `prefix` is given, branches whose name doesn't start with it.
pub fn prune_candidates<'a>(
    remote: &str,
    refs: &'a BranchReferenceMap,
    tracked: &TrackedBranchMap,
    prefix: Option<&str>,
) -> Result<Vec<&'a Branch>> {
    let branches = refs
        .remote(remote)
        .filter(|branches| !branches.is_empty())
        .ok_or_else(|| ClipError::UnknownRemote(remote.to_string()))?;

    let candidates = branches
        .values()
        .filter(|branch| branch.name != "HEAD")
        .filter(|branch| !exists_locally(branch, refs))
        .filter(|branch| !is_tracked(branch, remote, tracked))
        .filter(|branch| exists_remotely(branch, remote, refs))
        .filter(|branch| prefix.map_or(true, |prefix| branch.name.starts_with(prefix)))
        .collect();
    Ok(candidates)
}
