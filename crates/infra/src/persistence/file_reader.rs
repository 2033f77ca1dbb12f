// crates/infra/src/persistence/file_reader.rs
use std::{fs, io::ErrorKind, path::Path};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the whole file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path)
    }

    /// Like [`FileReader::read_to_string`], but a missing file is `Ok(None)`.
    pub fn read_optional(path: &Path) -> std::io::Result<Option<String>> {
        match Self::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
