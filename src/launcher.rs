//! Handing generated scripts to a terminal.
//!
//! Two steps, both synchronous:
//!
//! 1. `write_script` persists the script text to an owner-only (`0700`)
//!    temporary file named `az-installer-*.sh`.
//! 2. `spawn_detached` starts the terminal in its own process group and
//!    returns without waiting. Once spawned, the launcher has no further
//!    control over the script.
//!
//! The terminal runs the script through a small wrapper that deletes the
//! file when bash exits, so the temp file is owned by the session that
//! runs it.

use std::fs::Permissions;
use std::io::{ErrorKind, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{error, info};

use crate::error::{LauncherError, Result};
use crate::types::Terminal;

/// Temp script file name prefix
pub const SCRIPT_PREFIX: &str = "az-installer-";

/// Temp script file name suffix
pub const SCRIPT_SUFFIX: &str = ".sh";

/// Title of the terminal window running the installation
pub const INSTALL_WINDOW_TITLE: &str = "Installation Process";

/// Runs `$1` with bash, removes it, and keeps bash's exit status
const RUN_AND_REMOVE: &str = r#"bash "$1"; status=$?; rm -f -- "$1"; exit $status"#;

/// Write `script` to a new temp file in the system temp directory
pub fn write_script(script: &str) -> Result<PathBuf> {
    write_script_in(&std::env::temp_dir(), script)
}

/// Write `script` to a new, executable temp file in `dir`
///
/// The file is kept on disk; whoever runs it is responsible for removing it.
pub fn write_script_in(dir: &Path, script: &str) -> Result<PathBuf> {
    let write_err = |e: std::io::Error| LauncherError::script_write(e.to_string());

    let mut file = tempfile::Builder::new()
        .prefix(SCRIPT_PREFIX)
        .suffix(SCRIPT_SUFFIX)
        .tempfile_in(dir)
        .map_err(write_err)?;
    file.write_all(script.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    // Until `keep`, dropping `file` on an error path deletes it
    file.as_file()
        .set_permissions(Permissions::from_mode(0o700))
        .map_err(write_err)?;

    let (_, path) = file
        .keep()
        .map_err(|e| LauncherError::script_write(e.to_string()))?;

    info!("Install script written to {}", path.display());
    Ok(path)
}

/// Typed argv for a process the launcher starts
///
/// Implementors own the mapping from their fields to the exact program and
/// arguments, so call sites never assemble argv by hand.
pub trait LaunchArgs {
    /// Executable to spawn
    fn program(&self) -> &str;

    /// Arguments, exactly as passed to the program
    fn to_cli_args(&self) -> Vec<String>;

    /// Human-readable command line, for logs and dry runs
    fn describe(&self) -> String {
        let mut line = self.program().to_string();
        for arg in self.to_cli_args() {
            line.push(' ');
            if arg.contains(char::is_whitespace) || arg.is_empty() {
                line.push_str(&crate::synth::shell_quote(&arg));
            } else {
                line.push_str(&arg);
            }
        }
        line
    }
}

/// A terminal window running one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLaunch {
    pub terminal: Terminal,
    pub title: String,
    pub command: Vec<String>,
}

impl TerminalLaunch {
    /// Run a generated install script, deleting it afterwards
    pub fn install_script(terminal: Terminal, script: &Path) -> Self {
        Self {
            terminal,
            title: INSTALL_WINDOW_TITLE.to_string(),
            command: vec![
                "bash".to_string(),
                "-c".to_string(),
                RUN_AND_REMOVE.to_string(),
                "azlauncher".to_string(),
                script.display().to_string(),
            ],
        }
    }

    /// Run an existing shell script, leaving it in place
    pub fn shell_script(terminal: Terminal, title: impl Into<String>, script: &Path) -> Self {
        Self {
            terminal,
            title: title.into(),
            command: vec!["bash".to_string(), script.display().to_string()],
        }
    }
}

impl LaunchArgs for TerminalLaunch {
    fn program(&self) -> &str {
        self.terminal.program()
    }

    fn to_cli_args(&self) -> Vec<String> {
        self.terminal.command_args(&self.title, &self.command)
    }
}

/// Extension trait for starting a command detached from the launcher
pub trait DetachedProcess {
    /// Own process group, no inherited stdio
    fn detached(&mut self) -> &mut Self;
}

impl DetachedProcess for Command {
    fn detached(&mut self) -> &mut Self {
        use std::os::unix::process::CommandExt;
        // process_group(0) makes the child the leader of a new group, so
        // terminal signals aimed at the launcher do not reach it
        self.process_group(0)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
    }
}

/// Spawn `args` detached and return its PID without waiting
///
/// A missing executable is reported as `TerminalNotFound`; any other spawn
/// failure as `Launch`.
pub fn spawn_detached<T: LaunchArgs>(args: &T) -> Result<u32> {
    let program = args.program();
    info!("Launching: {}", args.describe());

    let child = Command::new(program)
        .args(args.to_cli_args())
        .detached()
        .spawn()
        .map_err(|e| {
            error!("Failed to spawn {}: {}", program, e);
            if e.kind() == ErrorKind::NotFound {
                LauncherError::TerminalNotFound {
                    program: program.to_string(),
                }
            } else {
                LauncherError::launch(e.to_string())
            }
        })?;

    let pid = child.id();
    info!("{} started (pid {})", program, pid);
    Ok(pid)
}
