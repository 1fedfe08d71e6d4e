pub mod prune;
pub mod show;
