//! Launcher settings file.
//!
//! Settings live in `config.json` at the repository root, shared with the
//! shell side (`cli/load_configs.sh` reads the same file). Keys the launcher
//! does not model are kept verbatim so saving never drops them.
//!
//! Lookup order: `config.json`, then `config.example.json`, then defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::LauncherError;
use crate::types::{MachineModel, Terminal};

/// Settings file name at the repository root
pub const CONFIG_FILE: &str = "config.json";

/// Shipped defaults, used when no settings file exists yet
pub const EXAMPLE_CONFIG_FILE: &str = "config.example.json";

/// Launcher settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Machine model used by the essential preset
    #[serde(default)]
    pub model: MachineModel,

    /// Terminal emulator that runs install scripts
    #[serde(default)]
    pub terminal: Terminal,

    /// Other settings, preserved as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl LauncherConfig {
    /// `{repo_dir}/config.json`
    pub fn config_path(repo_dir: &Path) -> PathBuf {
        repo_dir.join(CONFIG_FILE)
    }

    /// `{repo_dir}/config.example.json`
    pub fn example_config_path(repo_dir: &Path) -> PathBuf {
        repo_dir.join(EXAMPLE_CONFIG_FILE)
    }

    /// Load settings for `repo_dir`, falling back to the example file, then
    /// to defaults
    pub fn load(repo_dir: &Path) -> Result<Self> {
        let path = Self::config_path(repo_dir);
        if path.exists() {
            debug!("Loading settings from {}", path.display());
            return Self::load_from_file(&path);
        }
        Self::reset_to_default(repo_dir)
    }

    /// Defaults from `config.example.json`, or built-in defaults if absent
    pub fn reset_to_default(repo_dir: &Path) -> Result<Self> {
        let example = Self::example_config_path(repo_dir);
        if example.exists() {
            info!("Using default settings from {}", example.display());
            Self::load_from_file(&example)
        } else {
            debug!("No settings file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings JSON in {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Set one setting from its string form
    ///
    /// `model` and `terminal` must parse as their enums. New keys must be
    /// shell-friendly names; keys already in the file are accepted as they
    /// are. Other settings keep
    /// their current JSON type when it is a boolean; everything else is
    /// stored as a string.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "model" => {
                self.model = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid model '{}'. Valid: pc, laptop", value)
                })?;
            }
            "terminal" => {
                self.terminal = value.parse().map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid terminal '{}'. Valid: kitty, alacritty, foot, gnome-terminal, xterm",
                        value
                    )
                })?;
            }
            _ => {
                if !self.extra.contains_key(key) {
                    validate_key(key)?;
                }
                let parsed = match self.extra.get(key) {
                    Some(Value::Bool(_)) => Value::Bool(value.parse().map_err(|_| {
                        anyhow::anyhow!("Setting '{}' expects true or false, got '{}'", key, value)
                    })?),
                    _ => Value::String(value.to_string()),
                };
                self.extra.insert(key.to_string(), parsed);
            }
        }
        Ok(())
    }

    /// Settings as display rows, sorted by key
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("model".to_string(), self.model.to_string()),
            ("terminal".to_string(), self.terminal.to_string()),
        ];
        rows.extend(self.extra.iter().map(|(key, value)| {
            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), shown)
        }));
        rows.sort();
        rows
    }
}

/// Names for new settings are shell-friendly identifiers
fn validate_key(key: &str) -> std::result::Result<(), LauncherError> {
    if key.trim().is_empty() {
        return Err(LauncherError::config("Setting names cannot be empty"));
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(LauncherError::config(format!(
            "Setting '{}' can only contain letters, numbers, and underscores",
            key
        )));
    }
    Ok(())
}
