// crates/infra/src/persistence/record_file.rs
use std::path::Path;

use git_versioning_domain::{RevisionInfo, decode_record, encode_record};
use git_versioning_ports::RevisionRecordStore;
use git_versioning_shared_kernel::{ErrorContext, InfrastructureError, Result};

use super::{FileReader, FileWriter};

/// Stores the revision record as a one-line text file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFile;

impl RevisionRecordStore for RecordFile {
    fn load(&self, path: &Path) -> Result<Option<RevisionInfo>> {
        let text = FileReader::read_optional(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        match text {
            Some(text) => decode_record(&text).with_context(|| format!("parsing {}", path.display())),
            None => Ok(None),
        }
    }

    fn save(&self, path: &Path, revision: Option<&RevisionInfo>) -> Result<()> {
        FileWriter::atomic_write(path, encode_record(revision).as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        Ok(())
    }
}
