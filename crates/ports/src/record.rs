// crates/ports/src/record.rs
use std::path::Path;

use git_versioning_domain::RevisionInfo;
use git_versioning_shared_kernel::Result;

/// Port for the persisted revision record.
pub trait RevisionRecordStore: Send + Sync {
    /// `Ok(None)` when no record exists at `path` or it records no revision.
    fn load(&self, path: &Path) -> Result<Option<RevisionInfo>>;

    /// Replace the record at `path`.
    fn save(&self, path: &Path, revision: Option<&RevisionInfo>) -> Result<()>;
}
