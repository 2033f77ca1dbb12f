//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`resolver`]: memoized version resolution and the record write path
//! - [`dto`]: data transfer objects handed to presentation code
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod resolver;

pub use dto::VersionReport;
pub use resolver::VersionResolver;
