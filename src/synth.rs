//! Install script synthesis.
//!
//! Turns an ordered command list and a directory of install modules into a
//! self-contained bash script. The shape of the output is the contract with
//! the shell that runs it:
//!
//! 1. shebang and `export repo_dir=...`
//! 2. `on_exit`, installed with `trap on_exit EXIT`, which lists ignored
//!    commands and waits for Enter so the terminal stays open
//! 3. `run_with_recovery`, which runs one command and on failure asks
//!    retry / ignore / abort (empty answer = retry, bad answer = ask again,
//!    closed stdin = abort)
//! 4. `source` of every `*.sh` file in the module directory, by file name
//! 5. one `run_with_recovery '<command>'` per command, in order
//!
//! The script never sets `set -e`; failures are decided by the operator in
//! the recovery routine.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{LauncherError, Result};

/// Module directory, relative to the repository root
pub const DEFAULT_MODULE_DIR: &str = "scripts/install_modules";

/// File extension of sourceable install modules
pub const MODULE_EXTENSION: &str = "sh";

/// Name of the per-command wrapper function in generated scripts
pub const RECOVERY_FUNCTION: &str = "run_with_recovery";

const ON_EXIT: &str = r#"IGNORED_COMMANDS=()

on_exit() {
    echo
    if [ "${#IGNORED_COMMANDS[@]}" -gt 0 ]; then
        echo -e "\e[1;33m--- Ignored failures: ---\e[0m"
        printf '  %s\n' "${IGNORED_COMMANDS[@]}"
    fi
    read -r -p "--- Script finished. Press Enter to close terminal. --- " _
}
trap on_exit EXIT
"#;

const RUN_WITH_RECOVERY: &str = r#"run_with_recovery() {
    local cmd="$1"
    local status choice
    while true; do
        echo -e "\n\e[1;34m--- Running: ${cmd} ---\e[0m"
        eval "$cmd"
        status=$?
        if [ "$status" -eq 0 ]; then
            echo -e "\e[1;32m--- Finished: ${cmd} ---\e[0m"
            return 0
        fi
        echo -e "\e[1;31m--- Failed (exit ${status}): ${cmd} ---\e[0m"
        while true; do
            if ! read -r -p "[R]etry, [I]gnore or [A]bort? [R] " choice; then
                echo
                choice="abort"
            fi
            case "${choice,,}" in
                ""|r|retry)
                    continue 2
                    ;;
                i|ignore)
                    echo -e "\e[1;33m--- Ignoring failure: ${cmd} ---\e[0m"
                    IGNORED_COMMANDS+=("$cmd")
                    return 0
                    ;;
                a|abort)
                    echo -e "\e[1;31m--- Aborting installation ---\e[0m"
                    exit 1
                    ;;
                *)
                    echo "Invalid choice '${choice}'. Enter r, i or a."
                    ;;
            esac
        done
    done
}
"#;

/// Single-quote `value` for bash, escaping embedded single quotes
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Module files in `dir`, sorted by file name
///
/// Only regular files with the module extension are returned.
pub fn discover_modules(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = |source: std::io::Error| LauncherError::ModuleDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut modules = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir)? {
        let entry = entry.map_err(read_dir)?;
        let path = entry.path();
        let is_module = path.extension().is_some_and(|ext| ext == MODULE_EXTENSION);
        if is_module && path.is_file() {
            modules.push(path);
        }
    }
    modules.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!("Found {} module(s) in {}", modules.len(), dir.display());
    Ok(modules)
}

/// Generates install scripts for one repository layout
#[derive(Debug, Clone)]
pub struct ScriptSynthesizer {
    module_dir: PathBuf,
    repo_dir: PathBuf,
}

impl ScriptSynthesizer {
    pub fn new(module_dir: impl Into<PathBuf>, repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            module_dir: module_dir.into(),
            repo_dir: repo_dir.into(),
        }
    }

    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    /// Script text running `commands` in order
    ///
    /// `commands` must not be empty; an empty list is `EmptySelection`.
    pub fn generate(&self, commands: &[String]) -> Result<String> {
        if commands.is_empty() {
            return Err(LauncherError::EmptySelection);
        }
        let modules = discover_modules(&self.module_dir)?;
        let script = render(commands, &modules, &self.repo_dir);
        info!(
            "Generated install script: {} command(s), {} module(s)",
            commands.len(),
            modules.len()
        );
        Ok(script)
    }
}

/// Shorthand for `ScriptSynthesizer::new(module_dir, repo_dir).generate(commands)`
pub fn generate(commands: &[String], module_dir: &Path, repo_dir: &Path) -> Result<String> {
    ScriptSynthesizer::new(module_dir, repo_dir).generate(commands)
}

fn render(commands: &[String], modules: &[PathBuf], repo_dir: &Path) -> String {
    let mut script = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(script, "#!/usr/bin/env bash");
    let _ = writeln!(script, "# Generated by azlauncher. Runs once, then may be deleted.");
    let _ = writeln!(
        script,
        "export repo_dir={}",
        shell_quote(&repo_dir.display().to_string())
    );
    script.push('\n');
    script.push_str(ON_EXIT);
    script.push('\n');
    script.push_str(RUN_WITH_RECOVERY);
    script.push('\n');

    for module in modules {
        let _ = writeln!(
            script,
            "source {}",
            shell_quote(&module.display().to_string())
        );
    }
    script.push('\n');

    for command in commands {
        let _ = writeln!(script, "{} {}", RECOVERY_FUNCTION, shell_quote(command));
    }
    script
}
