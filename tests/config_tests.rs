//! Settings file tests against a repository layout
//!
//! The settings file is shared with the shell side, so keys the launcher
//! does not model must survive a load / set / save cycle untouched.

use azlauncher::{LauncherConfig, MachineModel, Terminal};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const EXAMPLE: &str = r#"{
  "model": "pc",
  "gpu": "amd",
  "cursor_theme": "Bibata-Modern-Classic",
  "enable_numlock": true
}"#;

fn repo_with_example() -> TempDir {
    let repo = TempDir::new().unwrap();
    fs::write(LauncherConfig::example_config_path(repo.path()), EXAMPLE).unwrap();
    repo
}

#[test]
fn test_first_run_uses_example_settings() {
    let repo = repo_with_example();
    let config = LauncherConfig::load(repo.path()).unwrap();

    assert_eq!(config.model, MachineModel::Pc);
    assert_eq!(config.terminal, Terminal::Kitty);
    assert_eq!(config.extra.get("gpu"), Some(&Value::String("amd".into())));
}

#[test]
fn test_set_and_save_preserves_shared_keys() {
    let repo = repo_with_example();
    let path = LauncherConfig::config_path(repo.path());

    let mut config = LauncherConfig::load(repo.path()).unwrap();
    config.set("model", "laptop").unwrap();
    config.set("enable_numlock", "false").unwrap();
    config.save_to_file(&path).unwrap();

    let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["model"], "laptop");
    assert_eq!(raw["terminal"], "kitty");
    assert_eq!(raw["gpu"], "amd");
    assert_eq!(raw["cursor_theme"], "Bibata-Modern-Classic");
    assert_eq!(raw["enable_numlock"], false);

    // config.json now wins over the example
    let reloaded = LauncherConfig::load(repo.path()).unwrap();
    assert_eq!(reloaded.model, MachineModel::Laptop);
}

#[test]
fn test_reset_restores_example() {
    let repo = repo_with_example();
    let path = LauncherConfig::config_path(repo.path());

    let mut config = LauncherConfig::load(repo.path()).unwrap();
    config.set("gpu", "nvidia").unwrap();
    config.save_to_file(&path).unwrap();

    let reset = LauncherConfig::reset_to_default(repo.path()).unwrap();
    reset.save_to_file(&path).unwrap();

    let reloaded = LauncherConfig::load(repo.path()).unwrap();
    assert_eq!(reloaded.extra.get("gpu"), Some(&Value::String("amd".into())));
}

#[test]
fn test_unusual_shared_key_names_load_and_save() {
    let repo = TempDir::new().unwrap();
    let path = LauncherConfig::config_path(repo.path());
    fs::write(&path, r#"{"model": "pc", "wallpaper-dir": "/walls", "gpu.vendor": "amd"}"#).unwrap();

    let mut config = LauncherConfig::load(repo.path()).unwrap();
    config.set("terminal", "foot").unwrap();
    config.save_to_file(&path).unwrap();

    let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["wallpaper-dir"], "/walls");
    assert_eq!(raw["gpu.vendor"], "amd");
    assert_eq!(raw["terminal"], "foot");
}

#[test]
fn test_corrupt_settings_reported_with_path() {
    let repo = TempDir::new().unwrap();
    let path = LauncherConfig::config_path(repo.path());
    fs::write(&path, "{ not json").unwrap();

    let err = LauncherConfig::load(repo.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("config.json"));
}
