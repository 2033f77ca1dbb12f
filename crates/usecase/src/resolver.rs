// crates/usecase/src/resolver.rs
use std::{
    cell::OnceCell,
    path::{Path, PathBuf},
};

use git_versioning_domain::{GIT_VERSION_FILENAME, RevisionInfo, VersionSpec};
use git_versioning_ports::{RevisionQuery, RevisionRecordStore};
use git_versioning_shared_kernel::{ErrorContext, Result, RevisionCount, ShortHash};
use log::{debug, info, warn};

use crate::dto::VersionReport;

/// Resolves the version string of one package directory.
///
/// Revision info is looked up at most once per instance: the live history
/// query comes first and the persisted `GIT_VERSION` record is only consulted
/// when that query fails. If neither yields anything the revision is unknown
/// and the version strings carry no `-r<count>-<hash>` suffix.
pub struct VersionResolver<'a> {
    spec: VersionSpec,
    base_dir: PathBuf,
    query: &'a dyn RevisionQuery,
    store: &'a dyn RevisionRecordStore,
    revision: OnceCell<Option<RevisionInfo>>,
}

impl<'a> VersionResolver<'a> {
    pub fn new(
        spec: VersionSpec,
        base_dir: impl Into<PathBuf>,
        query: &'a dyn RevisionQuery,
        store: &'a dyn RevisionRecordStore,
    ) -> Self {
        Self { spec, base_dir: base_dir.into(), query, store, revision: OnceCell::new() }
    }

    pub fn spec(&self) -> &VersionSpec {
        &self.spec
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Location of the persisted record, `<base_dir>/GIT_VERSION`.
    pub fn record_path(&self) -> PathBuf {
        self.base_dir.join(GIT_VERSION_FILENAME)
    }

    pub fn semantic_version(&self) -> String {
        self.spec.semantic_version()
    }

    /// Revision info, computed on first call and cached afterwards.
    pub fn revision(&self) -> Option<&RevisionInfo> {
        self.revision.get_or_init(|| self.resolve_revision()).as_ref()
    }

    pub fn revision_count(&self) -> Option<RevisionCount> {
        self.revision().map(|info| info.count)
    }

    pub fn short_hash(&self) -> Option<&ShortHash> {
        self.revision().map(|info| &info.short_hash)
    }

    pub fn git_version(&self) -> String {
        self.spec.git_version(self.revision())
    }

    pub fn version(&self) -> String {
        self.spec.version(self.revision())
    }

    pub fn report(&self) -> VersionReport {
        VersionReport {
            version: self.version(),
            git_version: self.git_version(),
            semantic_version: self.semantic_version(),
            git_sha: self.short_hash().map(|hash| hash.as_str().to_string()),
            git_revs: self.revision_count().map(RevisionCount::value),
        }
    }

    /// Persist the current revision info next to the package.
    ///
    /// Any existing record is replaced. Write failures are returned to the
    /// caller; this normally runs as part of an explicit packaging step.
    pub fn write_version_file(&self) -> Result<PathBuf> {
        let path = self.record_path();
        let revision = self.revision();
        self.store
            .save(&path, revision)
            .with_context(|| format!("writing revision record {}", path.display()))?;
        match revision {
            Some(rev) => info!("wrote {} (r{} {})", path.display(), rev.count, rev.short_hash),
            None => warn!("wrote {} without revision info", path.display()),
        }
        Ok(path)
    }

    fn resolve_revision(&self) -> Option<RevisionInfo> {
        let live = self
            .query
            .reachable_commits(&self.base_dir)
            .and_then(|commits| RevisionInfo::from_commits(&commits).map_err(Into::into));
        match live {
            Ok(revision) => return revision,
            Err(err) => debug!("revision query failed in {}: {err}", self.base_dir.display()),
        }

        let path = self.record_path();
        match self.store.load(&path) {
            Ok(Some(revision)) => {
                debug!("using revision record {}", path.display());
                Some(revision)
            }
            Ok(None) => {
                debug!("no revision record at {}", path.display());
                None
            }
            Err(err) => {
                warn!("ignoring unreadable revision record {}: {err}", path.display());
                None
            }
        }
    }
}
