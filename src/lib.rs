//! Semantic version strings annotated with git revision info.
//!
//! A [`VersionSpec`] holds the hand-maintained `major.minor.bugfix` and `dev`
//! fields. A [`VersionResolver`] combines it with the revision count and short
//! hash of the package's git history, e.g. `0.1dev-r190-423abc1`. Packaging
//! steps call [`VersionResolver::write_version_file`] so that a tree shipped
//! without its `.git` directory still resolves the same version from the
//! `GIT_VERSION` record.
//!
//! ```no_run
//! use git_versioning::VersionSpec;
//!
//! let resolver = git_versioning::manifest_resolver!(VersionSpec::new(0, Some(1), None, true));
//! println!("{}", resolver.version());
//! ```

#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

pub mod args;
pub mod config;
pub mod output;

pub use git_versioning_domain::{GIT_VERSION_FILENAME, RevisionInfo, VersionSpec};
pub use git_versioning_infra::{GitCli, RecordFile};
pub use git_versioning_ports::{RevisionQuery, RevisionRecordStore};
pub use git_versioning_shared_kernel::{
    DomainError, ErrorContext, InfrastructureError, Result, RevisionCount, ShortHash, VersioningError,
};
pub use git_versioning_usecase::{VersionReport, VersionResolver};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static GIT: GitCli = GitCli::new();
static RECORD_FILE: RecordFile = RecordFile;

/// Resolver for `base_dir` backed by the `git` command and the `GIT_VERSION` file.
pub fn resolver(spec: VersionSpec, base_dir: impl Into<PathBuf>) -> VersionResolver<'static> {
    VersionResolver::new(spec, base_dir, &GIT, &RECORD_FILE)
}

/// Resolver rooted at the process working directory.
pub fn resolver_in_current_dir(spec: VersionSpec) -> std::io::Result<VersionResolver<'static>> {
    Ok(resolver(spec, std::env::current_dir()?))
}

/// Resolver rooted at the manifest directory of the crate that invokes the macro.
#[macro_export]
macro_rules! manifest_resolver {
    ($spec:expr) => {
        $crate::resolver($spec, env!("CARGO_MANIFEST_DIR"))
    };
}
