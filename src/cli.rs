use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::selection::Selection;
use crate::synth::DEFAULT_MODULE_DIR;
use crate::types::{MachineModel, Preset};

/// azlauncher - pick post-install items and run them in a terminal
#[derive(Parser, Debug)]
#[command(name = "azlauncher")]
#[command(about = "Select Arch post-install steps and run them as one recoverable script")]
#[command(version)]
pub struct Cli {
    /// Repository root holding install modules, cli/ and config.json
    #[arg(long, global = true, env = "AZ_REPO_DIR")]
    pub repo_dir: Option<PathBuf>,

    /// Settings file to use instead of {repo_dir}/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON catalog to use instead of the built-in item table
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Dry-run mode: write the script and show the terminal command, but
    /// do not open a terminal.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog items by section and group
    List {
        /// Only show this section
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Print the install script for a selection
    Script {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Write the script here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate the install script and run it in a new terminal
    Run {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Show or change launcher settings
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print current settings
    Show,
    /// Change one setting and save
    Set {
        key: String,
        value: String,
        /// Run cli/load_configs.sh in a terminal after saving
        #[arg(long)]
        apply: bool,
    },
    /// Restore settings from config.example.json
    Reset,
}

/// Flags that build a selection
///
/// Applied in a fixed order: preset, then `--select`, then `--deselect`.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Start from a preset (essential, essential-laptop, all, none)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Machine model for the essential preset (overrides settings)
    #[arg(short, long)]
    pub model: Option<MachineModel>,

    /// Select an item by id (repeatable)
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Deselect an item by id (repeatable)
    #[arg(long = "deselect", value_name = "ID")]
    pub deselect: Vec<String>,

    /// Directory of install modules to source
    #[arg(long)]
    pub module_dir: Option<PathBuf>,
}

impl SelectionArgs {
    /// Apply the flags to `selection`
    ///
    /// `configured` is the model from settings, used unless `--model` is
    /// given. Stops at the first unknown id.
    pub fn apply(&self, selection: &mut Selection<'_>, configured: MachineModel) -> Result<()> {
        let model = self.model.unwrap_or(configured);
        if let Some(preset) = self.preset {
            selection.apply_preset(preset, model);
        }
        for id in &self.select {
            selection.set_selected(id, true)?;
        }
        for id in &self.deselect {
            selection.set_selected(id, false)?;
        }
        Ok(())
    }

    /// `--module-dir`, or `{repo_dir}/scripts/install_modules`, as an
    /// absolute path
    ///
    /// Generated scripts source modules by this path, and modules may `cd`.
    pub fn module_dir(&self, repo_dir: &Path) -> std::io::Result<PathBuf> {
        match &self.module_dir {
            Some(dir) => std::path::absolute(dir),
            None => std::path::absolute(repo_dir.join(DEFAULT_MODULE_DIR)),
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// `--repo-dir` / `$AZ_REPO_DIR`, else the current directory
    ///
    /// Always absolute: the path is exported to install modules as
    /// `$repo_dir` and must survive a `cd`.
    pub fn repo_dir(&self) -> std::io::Result<PathBuf> {
        match &self.repo_dir {
            Some(dir) => std::path::absolute(dir),
            None => std::env::current_dir(),
        }
    }
}
