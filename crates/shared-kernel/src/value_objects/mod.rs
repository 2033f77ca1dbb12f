// crates/shared-kernel/src/value_objects/mod.rs
pub mod revision;

pub use revision::{RevisionCount, SHORT_HASH_LEN, ShortHash};
