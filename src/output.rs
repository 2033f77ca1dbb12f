// src/output.rs
use std::io::{self, Write};

use crate::{VersionReport, args::InfoFormat};

/// Render a report as aligned `key: value` lines or pretty JSON.
pub fn write_report<W: Write>(out: &mut W, report: &VersionReport, format: InfoFormat) -> io::Result<()> {
    match format {
        InfoFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
        InfoFormat::Text => {
            let unknown = || "unknown".to_string();
            writeln!(out, "version:          {}", report.version)?;
            writeln!(out, "git_version:      {}", report.git_version)?;
            writeln!(out, "semantic_version: {}", report.semantic_version)?;
            writeln!(out, "git_sha:          {}", report.git_sha.clone().unwrap_or_else(unknown))?;
            writeln!(
                out,
                "git_revs:         {}",
                report.git_revs.map_or_else(unknown, |revs| revs.to_string())
            )
        }
    }
}
