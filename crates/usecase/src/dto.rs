// crates/usecase/src/dto.rs
use serde::Serialize;

/// Every rendering of one resolved version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    /// Git version for development builds, semantic version otherwise.
    pub version: String,
    pub git_version: String,
    pub semantic_version: String,
    pub git_sha: Option<String>,
    pub git_revs: Option<u64>,
}
