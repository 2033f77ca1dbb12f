// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod git;
pub mod persistence;

pub use git::GitCli;
pub use persistence::RecordFile;
