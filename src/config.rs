// src/config.rs
use std::path::Path;

use git_versioning_infra::persistence::FileReader;
use git_versioning_shared_kernel::{ErrorContext, InfrastructureError, Result};

use crate::{VersionSpec, args::SpecArgs};

/// Build the version spec from an optional config file plus explicit flags.
///
/// Flags win over file values; `--dev` can only switch the flag on.
pub fn load_spec(args: &SpecArgs) -> Result<VersionSpec> {
    let mut spec = match &args.config {
        Some(path) => read_spec_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => VersionSpec::default(),
    };
    if let Some(major) = args.major {
        spec.major = major;
    }
    if args.minor.is_some() {
        spec.minor = args.minor;
    }
    if args.bugfix.is_some() {
        spec.bugfix = args.bugfix;
    }
    spec.dev |= args.dev;
    Ok(spec)
}

fn read_spec_file(path: &Path) -> Result<VersionSpec> {
    let text = FileReader::read_to_string(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => parse_yaml(&text),
        _ => Ok(serde_json::from_str(&text)?),
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> Result<VersionSpec> {
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_text: &str) -> Result<VersionSpec> {
    Err(InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    }
    .into())
}
