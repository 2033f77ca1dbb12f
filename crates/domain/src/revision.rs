// crates/domain/src/revision.rs
use git_versioning_shared_kernel::{DomainError, DomainResult, RevisionCount, ShortHash};
use serde::{Deserialize, Serialize};

/// Revision count and short hash, always known together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevisionInfo {
    pub count: RevisionCount,
    pub short_hash: ShortHash,
}

impl RevisionInfo {
    pub fn new(count: u64, commit_id: &str) -> DomainResult<Self> {
        let count = RevisionCount::new(count)
            .ok_or_else(|| DomainError::InvalidRevisionCount { value: count.to_string() })?;
        Ok(Self { count, short_hash: commit_id.parse()? })
    }

    /// Derive revision info from commit ids ordered most recent first.
    ///
    /// An empty history has no revision info.
    pub fn from_commits<S: AsRef<str>>(commits: &[S]) -> DomainResult<Option<Self>> {
        let Some(head) = commits.first() else {
            return Ok(None);
        };
        let count = u64::try_from(commits.len())
            .ok()
            .and_then(RevisionCount::new)
            .ok_or_else(|| DomainError::InvalidRevisionCount { value: commits.len().to_string() })?;
        Ok(Some(Self { count, short_hash: head.as_ref().parse()? }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_is_first_commit() {
        let commits = ["423abc1ffffffff", "0000000aaaaaaaa", "1111111bbbbbbbb"];
        let info = RevisionInfo::from_commits(&commits).unwrap().unwrap();
        assert_eq!(info.count, 3);
        assert_eq!(info.short_hash, "423abc1");
    }

    #[test]
    fn empty_history_has_no_info() {
        let commits: [&str; 0] = [];
        assert_eq!(RevisionInfo::from_commits(&commits).unwrap(), None);
    }

    #[test]
    fn blank_head_is_an_error() {
        assert!(RevisionInfo::from_commits(&["   "]).is_err());
    }

    #[test]
    fn new_rejects_zero_count() {
        assert!(matches!(
            RevisionInfo::new(0, "abc1234"),
            Err(DomainError::InvalidRevisionCount { .. })
        ));
    }
}
