// Branch graph built from `git show-ref` and `git config` output

use std::collections::BTreeMap;
use std::fmt;

/// Branch names that are all treated as the mainline of a repository
pub const TRUNK_NAMES: [&str; 3] = ["main", "master", "trunk"];

/// Who a branch belongs to: the local repository or one of its remotes
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Owner {
    Local,
    Remote(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    /// Reference without the `refs/` prefix, `heads/master` or `remotes/origin/master`
    pub reference: String,
    pub sha: String,
    pub owner: Owner,
}

impl Branch {
    pub fn new(name: &str, reference: &str, sha: &str, owner: Owner) -> Self {
        Self {
            name: name.to_string(),
            reference: reference.trim().to_string(),
            sha: sha.trim().to_string(),
            owner,
        }
    }
}

pub type BranchMap = BTreeMap<String, Branch>;

/// Every branch we know of, grouped by owner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchReferenceMap {
    local: BranchMap,
    remotes: BTreeMap<String, BranchMap>,
}

impl BranchReferenceMap {
    /// Insert a branch under its owner, replacing any branch of the same name there
    pub fn insert(&mut self, branch: Branch) {
        let branches = match &branch.owner {
            Owner::Local => &mut self.local,
            Owner::Remote(remote) => self.remotes.entry(remote.clone()).or_default(),
        };
        branches.insert(branch.name.clone(), branch);
    }

    pub fn local(&self) -> &BranchMap {
        &self.local
    }

    pub fn remote(&self, remote: &str) -> Option<&BranchMap> {
        self.remotes.get(remote)
    }

    /// Remotes in name order
    pub fn remotes(&self) -> impl Iterator<Item = (&str, &BranchMap)> {
        self.remotes
            .iter()
            .map(|(name, branches)| (name.as_str(), branches))
    }

    pub fn get(&self, owner: &Owner, name: &str) -> Option<&Branch> {
        match owner {
            Owner::Local => self.local.get(name),
            Owner::Remote(remote) => self.remotes.get(remote)?.get(name),
        }
    }
}

/// Upstream configuration of a local branch
///
/// `remote` and `merge` come from two separate config lines, so either may be
/// missing while the config is being read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedBranch {
    pub remote: Option<String>,
    /// Upstream branch name with any `refs/heads/` prefix stripped
    pub merge: Option<String>,
}

pub type TrackedBranchMap = BTreeMap<String, TrackedBranch>;

/// A local branch together with everything on the remotes that looks like it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDetail<'a> {
    pub name: String,
    pub reference: String,
    pub sha: String,
    /// Ordered by owner then name, no duplicates
    pub remotes: Vec<&'a Branch>,
    pub tracked: Option<&'a TrackedBranch>,
}

impl<'a> BranchDetail<'a> {
    pub fn new(branch: &Branch) -> Self {
        Self {
            name: branch.name.clone(),
            reference: branch.reference.clone(),
            sha: branch.sha.clone(),
            remotes: Vec::new(),
            tracked: None,
        }
    }

    /// Returns false if the branch was already attached
    pub fn add_remote(&mut self, branch: &'a Branch) -> bool {
        let position = self
            .remotes
            .binary_search_by(|b| (&b.owner, &b.name).cmp(&(&branch.owner, &branch.name)));
        match position {
            Ok(_) => false,
            Err(index) => {
                self.remotes.insert(index, branch);
                true
            }
        }
    }
}

/// Key of the detail map. The mainline branch always lands on `Trunk`,
/// whatever the repository calls it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DetailKey {
    Trunk,
    Named(String),
}

impl DetailKey {
    pub fn for_branch(name: &str) -> Self {
        if TRUNK_NAMES.contains(&name) {
            DetailKey::Trunk
        } else {
            DetailKey::Named(name.to_string())
        }
    }
}

impl fmt::Display for DetailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailKey::Trunk => write!(f, "_trunk_"),
            DetailKey::Named(name) => write!(f, "{}", name),
        }
    }
}

pub type BranchDetailMap<'a> = BTreeMap<DetailKey, BranchDetail<'a>>;
