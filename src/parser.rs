// Parsers for `git show-ref` and `git config --get-regexp ^branch\.` output

use crate::model::{Branch, BranchReferenceMap, Owner, TrackedBranch, TrackedBranchMap};
use once_cell::sync::Lazy;
use regex::Regex;

static LOCAL_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^heads/(?P<name>.+)$").expect("Invalid Regex"));
static REMOTE_REF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^remotes/(?P<remote>.+?)/(?P<name>.+)$").expect("Invalid Regex")
});
static TRACKED_REMOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"branch\.(?P<branch>.*?)\.remote (?P<remote>.+)").expect("Invalid Regex")
});
static TRACKED_MERGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"branch\.(?P<branch>.*?)\.merge ((refs/)?heads/)?(?P<merge>.+)")
        .expect("Invalid Regex")
});

/// Parse `git show-ref` output into branches grouped by owner
///
/// ```text
/// 2dc90a39c09e52045a483fc8b58e45da386fb149 refs/heads/master
/// 2dc90a39c09e52045a483fc8b58e45da386fb149 refs/remotes/origin/master
/// ```
///
/// Tags and lines that don't look like a ref are skipped.
pub fn parse_branch_refs(input: &str) -> BranchReferenceMap {
    let mut refs = BranchReferenceMap::default();
    refs.parse_into(input);
    refs
}

impl BranchReferenceMap {
    /// Add the branches listed in `input`, overwriting the ones we already know by name
    pub fn parse_into(&mut self, input: &str) {
        for line in input.lines() {
            let parts: Vec<&str> = line.split("refs/").collect();
            let [sha, reference] = parts[..] else {
                log::trace!("Skipping show-ref line: {:?}", line);
                continue;
            };
            let reference = reference.trim();

            if let Some(caps) = LOCAL_REF_RE.captures(reference) {
                self.insert(Branch::new(&caps["name"], reference, sha, Owner::Local));
            } else if let Some(caps) = REMOTE_REF_RE.captures(reference) {
                let owner = Owner::Remote(caps["remote"].to_string());
                self.insert(Branch::new(&caps["name"], reference, sha, owner));
            } else {
                log::trace!("Ignoring reference: {}", reference);
            }
        }
    }
}

/// Parse the `branch.*` section of git config into the upstream of each local branch
///
/// The `remote` and `merge` lines of a branch can come in any order.
pub fn parse_tracked_branches(input: &str) -> TrackedBranchMap {
    let mut tracked = TrackedBranchMap::new();
    for line in input.lines() {
        if let Some(caps) = TRACKED_REMOTE_RE.captures(line) {
            tracked
                .entry(caps["branch"].to_string())
                .or_insert_with(TrackedBranch::default)
                .remote = Some(caps["remote"].trim().to_string());
        }
        if let Some(caps) = TRACKED_MERGE_RE.captures(line) {
            tracked
                .entry(caps["branch"].to_string())
                .or_insert_with(TrackedBranch::default)
                .merge = Some(caps["merge"].trim().to_string());
        }
    }
    tracked
}
