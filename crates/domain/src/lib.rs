//! # Domain
//!
//! Version model and the formatting rules built on it.
//!
//! - [`version`]: `major[.minor[.bugfix]][dev]` version fields
//! - [`revision`]: revision count and short hash taken from history
//! - [`record`]: text encoding of the persisted `GIT_VERSION` record

#![allow(clippy::multiple_crate_versions)]

pub mod record;
pub mod revision;
pub mod version;

pub use record::{GIT_VERSION_FILENAME, decode_record, encode_record};
pub use revision::RevisionInfo;
pub use version::VersionSpec;
