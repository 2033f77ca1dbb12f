//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`revision`]: querying the revision-control history of a directory
//! - [`record`]: loading and saving the persisted revision record
//!
//! These ports keep the resolver independent of `git` and of the filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod record;
pub mod revision;

pub use record::RevisionRecordStore;
pub use revision::RevisionQuery;
