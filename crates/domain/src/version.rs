// crates/domain/src/version.rs
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::revision::RevisionInfo;

/// The four hand-maintained fields of a version number.
///
/// `bugfix` without `minor` is accepted as-is and simply rendered after
/// `major`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionSpec {
    pub major: u64,
    #[serde(default)]
    pub minor: Option<u64>,
    #[serde(default)]
    pub bugfix: Option<u64>,
    #[serde(default)]
    pub dev: bool,
}

impl VersionSpec {
    pub const fn new(major: u64, minor: Option<u64>, bugfix: Option<u64>, dev: bool) -> Self {
        Self { major, minor, bugfix, dev }
    }

    /// `major[.minor][.bugfix][dev]`, e.g. `0.1dev` or `1.2.3`.
    pub fn semantic_version(&self) -> String {
        let mut out = self.major.to_string();
        if let Some(minor) = self.minor {
            let _ = write!(out, ".{minor}");
        }
        if let Some(bugfix) = self.bugfix {
            let _ = write!(out, ".{bugfix}");
        }
        if self.dev {
            out.push_str("dev");
        }
        out
    }

    /// Semantic version followed by `-r<count>-<hash>` when revision info is known.
    pub fn git_version(&self, revision: Option<&RevisionInfo>) -> String {
        let mut out = self.semantic_version();
        if let Some(info) = revision {
            let _ = write!(out, "-r{}-{}", info.count, info.short_hash);
        }
        out
    }

    /// Git version for development builds, plain semantic version for releases.
    pub fn version(&self, revision: Option<&RevisionInfo>) -> String {
        if self.dev { self.git_version(revision) } else { self.semantic_version() }
    }
}
