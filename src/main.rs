//! azlauncher - main entry point
//!
//! Thin front-end over the library: parse flags, load catalog and
//! settings, then list, print, or launch.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use azlauncher::cli::{Cli, Commands, ConfigCommands, SelectionArgs};
use azlauncher::launcher::{self, LaunchArgs, TerminalLaunch};
use azlauncher::{sanity, Catalog, LauncherConfig, LauncherError, ScriptSynthesizer, Selection};

/// Shell script that applies saved settings to the system
const LOAD_CONFIGS_SCRIPT: &str = "cli/load_configs.sh";

/// Initialize the logger with appropriate settings
fn init_logger() {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main application entry point
fn main() -> Result<()> {
    init_logger();
    debug!("azlauncher starting up");

    let cli = Cli::parse_args();
    let repo_dir = cli
        .repo_dir()
        .context("Failed to determine repository directory")?;
    debug!("Repository directory: {}", repo_dir.display());

    match &cli.command {
        Commands::List { section } => {
            let catalog = load_catalog(&cli, &repo_dir)?;
            list_catalog(&catalog, section.as_deref())
        }
        Commands::Script { selection, output } => {
            let catalog = load_catalog(&cli, &repo_dir)?;
            let (config, _) = load_config(&cli, &repo_dir)?;
            write_script(&catalog, &config, selection, &repo_dir, output.as_deref())
        }
        Commands::Run { selection } => {
            let catalog = load_catalog(&cli, &repo_dir)?;
            let (config, _) = load_config(&cli, &repo_dir)?;
            run_installer(&catalog, &config, selection, &repo_dir, cli.dry_run)
        }
        Commands::Config { action } => run_config_command(&cli, action, &repo_dir),
    }
}

fn load_catalog(cli: &Cli, repo_dir: &Path) -> Result<Catalog> {
    match &cli.catalog {
        Some(path) => Catalog::load_from_file(path, repo_dir)
            .with_context(|| format!("Failed to load catalog from {:?}", path)),
        None => Catalog::builtin(repo_dir).context("Built-in catalog is invalid"),
    }
}

/// Settings plus the path they are saved to
fn load_config(cli: &Cli, repo_dir: &Path) -> Result<(LauncherConfig, PathBuf)> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| LauncherConfig::config_path(repo_dir));
    let config = if cli.config.is_some() && path.exists() {
        LauncherConfig::load_from_file(&path)?
    } else if cli.config.is_some() {
        LauncherConfig::reset_to_default(repo_dir)?
    } else {
        LauncherConfig::load(repo_dir)?
    };
    Ok((config, path))
}

fn list_catalog(catalog: &Catalog, only: Option<&str>) -> Result<()> {
    let sections = catalog.sections();
    if let Some(name) = only {
        if !sections.iter().any(|section| section.name == name) {
            anyhow::bail!("Unknown section '{}'", name);
        }
    }

    for section in sections.iter().filter(|s| only.is_none_or(|name| s.name == name)) {
        println!("=== {} ===", section.name);
        for group in &section.groups {
            println!("  [{}]", group.name);
            for item in &group.items {
                println!("    {:<32} {:<17} {}", item.id, item.kind, item.display_label());
                if let Some(description) = &item.description {
                    println!("    {:<32} {:<17} {}", "", "", description);
                }
            }
        }
        println!();
    }
    Ok(())
}

/// Selected commands, or `None` after telling the user nothing is selected
fn selected_commands(
    catalog: &Catalog,
    config: &LauncherConfig,
    args: &SelectionArgs,
) -> Result<Option<Vec<String>>> {
    let mut selection = Selection::new(catalog);
    args.apply(&mut selection, config.model)?;
    info!("{} item(s) selected", selection.len());

    match selection.commands_for_install() {
        Ok(commands) => Ok(Some(commands)),
        Err(e) if e.is_informational() => {
            println!("{}.", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn write_script(
    catalog: &Catalog,
    config: &LauncherConfig,
    args: &SelectionArgs,
    repo_dir: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let Some(commands) = selected_commands(catalog, config, args)? else {
        return Ok(());
    };
    let module_dir = args
        .module_dir(repo_dir)
        .context("Failed to resolve module directory")?;
    let script = ScriptSynthesizer::new(module_dir, repo_dir).generate(&commands)?;

    match output {
        Some(path) => {
            fs::write(path, &script)
                .with_context(|| format!("Failed to write script to {:?}", path))?;
            println!("✓ Install script written to {}", path.display());
        }
        None => print!("{}", script),
    }
    Ok(())
}

fn run_installer(
    catalog: &Catalog,
    config: &LauncherConfig,
    args: &SelectionArgs,
    repo_dir: &Path,
    dry_run: bool,
) -> Result<()> {
    let Some(commands) = selected_commands(catalog, config, args)? else {
        return Ok(());
    };
    let module_dir = args
        .module_dir(repo_dir)
        .context("Failed to resolve module directory")?;

    let check = sanity::verify_environment(config.terminal, &module_dir);
    if !check.is_ok() {
        for problem in check.problems() {
            eprintln!("✗ {}", problem);
        }
        if !dry_run {
            anyhow::bail!("Environment check failed; nothing was launched");
        }
        warn!("Environment check failed, continuing because of --dry-run");
    }

    let script = ScriptSynthesizer::new(&module_dir, repo_dir).generate(&commands)?;
    let script_path = launcher::write_script(&script)?;
    let launch = TerminalLaunch::install_script(config.terminal, &script_path);

    if dry_run {
        println!("[DRY RUN] Script: {}", script_path.display());
        println!("[DRY RUN] Would run: {}", launch.describe());
        return Ok(());
    }

    match launcher::spawn_detached(&launch) {
        Ok(pid) => {
            println!(
                "✓ Installer started in {} (pid {}). Follow progress in that window.",
                config.terminal, pid
            );
            Ok(())
        }
        Err(e) => {
            // The terminal never ran the cleanup wrapper
            if let Err(rm) = fs::remove_file(&script_path) {
                warn!("Could not remove {}: {}", script_path.display(), rm);
            }
            if let LauncherError::TerminalNotFound { .. } = e {
                error!("Configured terminal '{}' is not available", config.terminal);
            }
            Err(e.into())
        }
    }
}

fn run_config_command(cli: &Cli, action: &ConfigCommands, repo_dir: &Path) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let (config, path) = load_config(cli, repo_dir)?;
            println!("# {}", path.display());
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
        ConfigCommands::Set { key, value, apply } => {
            let (mut config, path) = load_config(cli, repo_dir)?;
            config.set(key, value)?;
            config.save_to_file(&path)?;
            info!("Saved {} = {} to {}", key, value, path.display());
            println!("✓ {} = {}", key, value);
            if *apply {
                apply_settings(&config, repo_dir, cli.dry_run)?;
            }
        }
        ConfigCommands::Reset => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(|| LauncherConfig::config_path(repo_dir));
            let config = LauncherConfig::reset_to_default(repo_dir)?;
            config.save_to_file(&path)?;
            println!("✓ Settings reset to defaults in {}", path.display());
        }
    }
    Ok(())
}

/// Run `cli/load_configs.sh` in the configured terminal
fn apply_settings(config: &LauncherConfig, repo_dir: &Path, dry_run: bool) -> Result<()> {
    let script = repo_dir.join(LOAD_CONFIGS_SCRIPT);
    if !script.is_file() {
        warn!("{} not found, settings saved but not applied", script.display());
        eprintln!("! {} not found; settings were saved but not applied", script.display());
        return Ok(());
    }

    let launch = TerminalLaunch::shell_script(config.terminal, "Applying Settings", &script);
    if dry_run {
        println!("[DRY RUN] Would run: {}", launch.describe());
        return Ok(());
    }
    launcher::spawn_detached(&launch)?;
    println!("✓ Applying settings in {}", config.terminal);
    Ok(())
}
