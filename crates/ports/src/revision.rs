// crates/ports/src/revision.rs
use std::path::Path;

use git_versioning_shared_kernel::Result;

/// Port for listing the commits reachable from the current head.
pub trait RevisionQuery: Send + Sync {
    /// Commit identifiers reachable from HEAD in `dir`, most recent first.
    ///
    /// Fails when the tool is unavailable or `dir` has no usable history.
    fn reachable_commits(&self, dir: &Path) -> Result<Vec<String>>;
}
