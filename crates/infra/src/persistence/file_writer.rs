// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically replace `path` with `data` via a sibling temp file and rename.
    ///
    /// Readers see either the old or the new contents, never a partial write.
    /// The temp file is removed again if any step fails.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            Some(_) => Path::new("."),
            None => return Err(std::io::Error::other("path has no parent")),
        };

        let tmp = temp_sibling(parent, path);
        let result = write_and_sync(&tmp, data).and_then(|()| fs::rename(&tmp, path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
            return result;
        }

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

// PID + nanos keeps concurrent writers in the same directory apart.
fn temp_sibling(parent: &Path, target: &Path) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let stem = target.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    parent.join(format!(".{stem}.{}.{nanos}.tmp", std::process::id()))
}

fn write_and_sync(tmp: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(tmp)?);
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();
    Ok(())
}
