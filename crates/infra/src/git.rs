// crates/infra/src/git.rs
use std::{
    path::Path,
    process::{Command, Stdio},
};

use git_versioning_ports::RevisionQuery;
use git_versioning_shared_kernel::{InfrastructureError, Result};
use log::trace;

/// Lists reachable commits by running `git rev-list HEAD`.
#[derive(Debug, Clone, Copy)]
pub struct GitCli {
    program: &'static str,
}

impl GitCli {
    pub const fn new() -> Self {
        Self { program: "git" }
    }

    /// Use a different executable, e.g. an absolute path to `git`.
    pub const fn with_program(program: &'static str) -> Self {
        Self { program }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl RevisionQuery for GitCli {
    fn reachable_commits(&self, dir: &Path) -> Result<Vec<String>> {
        trace!("{} rev-list HEAD in {}", self.program, dir.display());
        let output = Command::new(self.program)
            .args(["rev-list", "HEAD"])
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| InfrastructureError::ProcessSpawn {
                program: self.program.to_string(),
                dir: dir.to_path_buf(),
                source,
            })?;
        if !output.status.success() {
            return Err(InfrastructureError::GitError {
                operation: "rev-list HEAD".to_string(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(parse_rev_list(&output.stdout))
    }
}

fn parse_rev_list(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use git_versioning_shared_kernel::VersioningError;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn trailing_newline_does_not_add_a_commit() {
        let out = b"423abc1d2e3f\n0011223344\n";
        assert_eq!(parse_rev_list(out), vec!["423abc1d2e3f".to_string(), "0011223344".to_string()]);
    }

    #[test]
    fn empty_output_is_empty_history() {
        assert!(parse_rev_list(b"").is_empty());
        assert!(parse_rev_list(b"\n\n").is_empty());
    }

    #[test]
    fn broken_checkout_fails() {
        let dir = tempdir().unwrap();
        // A bogus gitfile stops git from walking up into an enclosing repository.
        fs::write(dir.path().join(".git"), "not a gitdir\n").unwrap();

        assert!(GitCli::new().reachable_commits(dir.path()).is_err());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = tempdir().unwrap();
        let git = GitCli::with_program("git-versioning-no-such-binary");

        let err = git.reachable_commits(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            VersioningError::Infrastructure(InfrastructureError::ProcessSpawn { .. })
        ));
    }
}
