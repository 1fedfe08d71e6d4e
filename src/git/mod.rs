pub mod cli;
pub mod config;
pub mod history;
pub mod remote;
pub mod repo;

#[cfg(test)]
pub mod mock;

pub use cli::{load_refs, load_tracked, RefSource};
pub use history::{ahead_behind, remote_status, CommitLog, RemoteStatus};
pub use remote::RemoteBranchDeleter;
pub use repo::Git;
