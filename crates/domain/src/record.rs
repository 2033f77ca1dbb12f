// crates/domain/src/record.rs
//! Text form of the persisted revision record.
//!
//! A record is a single line `<count> <short_hash>`, e.g. `21 123acf1`. An
//! empty record stands for "no revision info" so that a tree packaged outside
//! of a checkout still round-trips.

use git_versioning_shared_kernel::{DomainError, DomainResult};

use crate::revision::RevisionInfo;

/// File name of the record inside the resolver's base directory.
pub const GIT_VERSION_FILENAME: &str = "GIT_VERSION";

pub fn encode_record(revision: Option<&RevisionInfo>) -> String {
    match revision {
        Some(info) => format!("{} {}\n", info.count, info.short_hash),
        None => String::new(),
    }
}

pub fn decode_record(text: &str) -> DomainResult<Option<RevisionInfo>> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    match fields.as_slice() {
        [] => Ok(None),
        [count, hash] => Ok(Some(RevisionInfo { count: count.parse()?, short_hash: hash.parse()? })),
        other => Err(DomainError::MalformedRecord {
            reason: format!("expected 2 fields, found {}", other.len()),
        }),
    }
}
