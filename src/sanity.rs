//! Pre-launch sanity checks
//!
//! Verifies, before anything is written or spawned:
//! - `bash` and the configured terminal are in PATH
//! - the install module directory exists
//!
//! Failures are reported to the user with guidance; selection state is
//! untouched so the user can fix the environment and retry.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use crate::types::Terminal;

/// Result of environment verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityCheckResult {
    pub missing_binaries: Vec<String>,
    /// Module directory, if it is missing
    pub missing_module_dir: Option<PathBuf>,
}

impl SanityCheckResult {
    /// Returns true if all checks passed
    pub fn is_ok(&self) -> bool {
        self.missing_binaries.is_empty() && self.missing_module_dir.is_none()
    }

    /// One line per problem, with a hint on how to fix it
    pub fn problems(&self) -> Vec<String> {
        let mut problems: Vec<String> = self
            .missing_binaries
            .iter()
            .map(|binary| {
                format!(
                    "'{}' was not found in PATH. Install it (e.g. pacman -S {}) or pick another terminal with `config set terminal ...`",
                    binary, binary
                )
            })
            .collect();
        if let Some(dir) = &self.missing_module_dir {
            problems.push(format!(
                "Module directory {} does not exist. Pass --module-dir or --repo-dir",
                dir.display()
            ));
        }
        problems
    }
}

/// Check if a binary is available in PATH
fn binary_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Perform all sanity checks and return the result
pub fn verify_environment(terminal: Terminal, module_dir: &Path) -> SanityCheckResult {
    let missing_binaries = ["bash", terminal.program()]
        .into_iter()
        .filter(|binary| !binary_exists(binary))
        .map(str::to_string)
        .collect();

    let missing_module_dir = (!module_dir.is_dir()).then(|| module_dir.to_path_buf());

    let result = SanityCheckResult {
        missing_binaries,
        missing_module_dir,
    };
    debug!("Sanity check: {:?}", result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanity_result_ok() {
        let result = SanityCheckResult {
            missing_binaries: vec![],
            missing_module_dir: None,
        };
        assert!(result.is_ok());
        assert!(result.problems().is_empty());
    }

    #[test]
    fn test_sanity_result_reports_each_problem() {
        let result = SanityCheckResult {
            missing_binaries: vec!["kitty".to_string()],
            missing_module_dir: Some(PathBuf::from("/r/scripts/install_modules")),
        };
        assert!(!result.is_ok());
        let problems = result.problems();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("'kitty'"));
        assert!(problems[1].contains("/r/scripts/install_modules"));
    }

    #[test]
    fn test_missing_module_dir_detected() {
        let result = verify_environment(Terminal::Kitty, Path::new("/nonexistent/modules"));
        assert_eq!(
            result.missing_module_dir,
            Some(PathBuf::from("/nonexistent/modules"))
        );
    }

    #[test]
    fn test_existing_module_dir_passes() {
        let dir = TempDir::new().unwrap();
        let result = verify_environment(Terminal::Xterm, dir.path());
        assert!(result.missing_module_dir.is_none());
    }
}
