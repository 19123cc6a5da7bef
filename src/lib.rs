//! azlauncher library
//!
//! Catalog, selection model, install script synthesis and terminal launch
//! for the Arch post-install launcher.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod sanity;
pub mod selection;
pub mod synth;
pub mod types;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogEntry, Group, Item, Section};
pub use config::LauncherConfig;
pub use error::{LauncherError, Result};
pub use launcher::{spawn_detached, write_script, LaunchArgs, TerminalLaunch};
pub use selection::Selection;
pub use synth::{discover_modules, generate, shell_quote, ScriptSynthesizer};
pub use types::{ItemKind, MachineModel, Preset, Terminal};
