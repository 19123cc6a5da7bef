//! Install item catalog.
//!
//! The catalog is an immutable, ordered table of entries. Headers open a
//! section; every following entry belongs to that section until the next
//! header. Catalog order is the order in which selected items run.
//!
//! # Ids
//!
//! Each selectable item is keyed by its command string, or `item_{index}`
//! when it has none. Ids must be unique among selectable items; a duplicate
//! is a defect in the table and `Catalog::from_entries` rejects it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{LauncherError, Result};
use crate::synth::shell_quote;
use crate::types::ItemKind;

/// Group used when an entry does not name one
pub const DEFAULT_GROUP: &str = "General";

/// Section for entries that appear before the first header
pub const UNKNOWN_SECTION: &str = "Unknown";

/// Placeholder substituted with the repository root in commands
pub const REPO_DIR_PLACEHOLDER: &str = "{repo_dir}";

/// Raw catalog entry, as written in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub func: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A resolved catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Stable identifier used by the selection model
    pub id: String,
    pub kind: ItemKind,
    pub label: String,
    /// Shell command or module function; `None` for headers
    pub command: Option<String>,
    pub group: String,
    /// Name of the nearest preceding header
    pub section: String,
    pub description: Option<String>,
}

impl Item {
    pub fn is_selectable(&self) -> bool {
        self.kind.is_selectable()
    }

    /// Label as shown in listings
    pub fn display_label(&self) -> String {
        match self.kind {
            ItemKind::EssentialLaptop => format!("{} (Laptop)", self.label),
            _ => self.label.clone(),
        }
    }
}

/// One section of the grouped view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub name: &'a str,
    /// Groups sorted by name
    pub groups: Vec<Group<'a>>,
}

/// Items sharing a group inside a section, in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub name: &'a str,
    pub items: Vec<&'a Item>,
}

/// Immutable, validated item table
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    /// Id -> position, selectable items only
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from raw entries
    ///
    /// Fails with `DuplicateItem` if two selectable entries share an id.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut items = Vec::with_capacity(entries.len());
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut section = UNKNOWN_SECTION.to_string();

        for (position, entry) in entries.into_iter().enumerate() {
            if entry.kind == ItemKind::Header {
                section = section_name(&entry.text);
                items.push(Item {
                    id: format!("header_{}", position),
                    kind: entry.kind,
                    label: section.clone(),
                    command: None,
                    group: DEFAULT_GROUP.to_string(),
                    section: section.clone(),
                    description: entry.description,
                });
                continue;
            }

            let id = entry
                .func
                .clone()
                .unwrap_or_else(|| format!("item_{}", position));
            if let Some(&first) = index.get(&id) {
                return Err(LauncherError::DuplicateItem {
                    id,
                    first,
                    second: position,
                });
            }
            index.insert(id.clone(), position);

            items.push(Item {
                id,
                kind: entry.kind,
                label: entry.text,
                command: entry.func,
                group: entry.group.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
                section: section.clone(),
                description: entry.description,
            });
        }

        debug!(
            "Catalog loaded: {} entries, {} selectable",
            items.len(),
            index.len()
        );
        Ok(Self { items, index })
    }

    /// The built-in catalog, with `{repo_dir}` resolved against `repo_dir`
    pub fn builtin(repo_dir: &Path) -> Result<Self> {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|entry| entry.to_entry())
            .collect();
        Self::from_entries(resolve_repo_dir(entries, repo_dir))
    }

    /// Load a catalog from a JSON array of entries
    pub fn load_from_file(path: &Path, repo_dir: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&content)?;
        Self::from_entries(resolve_repo_dir(entries, repo_dir))
    }

    /// All entries, headers included, in catalog order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Selectable entries in catalog order
    pub fn selectable(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_selectable())
    }

    /// Look up a selectable item by id
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Catalog position of a selectable item
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of selectable items
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Section -> group -> items view
    ///
    /// Sections appear in the order of their first item; sections without
    /// items are omitted. Groups are sorted by name and keep catalog order
    /// internally.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut order: Vec<&str> = Vec::new();
        let mut grouped: HashMap<&str, BTreeMap<&str, Vec<&Item>>> = HashMap::new();

        for item in self.selectable() {
            let section = item.section.as_str();
            if !grouped.contains_key(section) {
                order.push(section);
            }
            grouped
                .entry(section)
                .or_default()
                .entry(item.group.as_str())
                .or_default()
                .push(item);
        }

        order
            .into_iter()
            .map(|name| Section {
                name,
                groups: grouped
                    .remove(name)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(name, items)| Group { name, items })
                    .collect(),
            })
            .collect()
    }
}

/// `--- Core System ---` -> `Core System`
fn section_name(text: &str) -> String {
    text.replace("---", "").trim().to_string()
}

/// Commands are `eval`ed by the generated script, so the path is quoted
fn resolve_repo_dir(entries: Vec<CatalogEntry>, repo_dir: &Path) -> Vec<CatalogEntry> {
    let repo_dir = shell_quote(&repo_dir.display().to_string());
    entries
        .into_iter()
        .map(|mut entry| {
            if let Some(func) = entry.func.as_mut() {
                if func.contains(REPO_DIR_PLACEHOLDER) {
                    *func = func.replace(REPO_DIR_PLACEHOLDER, &repo_dir);
                }
            }
            entry
        })
        .collect()
}

// ============================================================================
// Built-in table
// ============================================================================

struct BuiltinEntry {
    kind: ItemKind,
    text: &'static str,
    func: Option<&'static str>,
    group: Option<&'static str>,
    description: Option<&'static str>,
}

impl BuiltinEntry {
    fn to_entry(&self) -> CatalogEntry {
        CatalogEntry {
            kind: self.kind,
            text: self.text.to_string(),
            func: self.func.map(str::to_string),
            group: self.group.map(str::to_string),
            description: self.description.map(str::to_string),
        }
    }
}

const fn header(text: &'static str) -> BuiltinEntry {
    BuiltinEntry {
        kind: ItemKind::Header,
        text,
        func: None,
        group: None,
        description: None,
    }
}

const fn entry(
    kind: ItemKind,
    text: &'static str,
    func: &'static str,
    group: &'static str,
    description: &'static str,
) -> BuiltinEntry {
    BuiltinEntry {
        kind,
        text,
        func: Some(func),
        group: Some(group),
        description: Some(description),
    }
}

use ItemKind::{Essential, EssentialLaptop, Optional, Special};

const BUILTIN_ENTRIES: &[BuiltinEntry] = &[
    header("--- Core System ---"),
    entry(Essential, "Install Linux Headers", "install_linux_headers", "System Kernel",
        "Installs essential Linux kernel headers for building modules and other system components."),
    entry(Essential, "Install systemd-oomd.service", "install_systemd_oomd", "System Services",
        "Installs and enables systemd-oomd, a userspace OOM killer that can prevent system freezes under heavy memory pressure."),
    entry(Essential, "Install ananicy-cpp", "install_ananicy_cpp", "System Optimization",
        "Installs ananicy-cpp, which automatically adjusts process nice values and I/O priorities for better system responsiveness."),
    entry(Essential, "Install inotify-tools", "install_inotify_tools", "System Monitoring",
        "Installs inotify-tools, a set of command-line programs for monitoring filesystem events."),
    entry(Essential, "Install Mission Center", "install_mission_center", "System Monitoring",
        "Installs Mission Center, a modern and fast system monitor for Linux."),
    entry(EssentialLaptop, "Install Power Options (TLP)", "install_power_options", "Power Management",
        "Installs TLP, an advanced power management tool for Linux, optimized for laptops to save battery power."),
    header("--- Package Management ---"),
    entry(Essential, "Install paru (AUR Helper)", "install_paru", "Package Managers",
        "Installs paru, an AUR helper that simplifies installing and managing packages from the Arch User Repository."),
    entry(Essential, "Install Reflector and Enable Timer", "install_reflector_and_enable_timer", "System Optimization",
        "Installs Reflector to find the fastest Arch Linux mirrors and enables its systemd timer for automatic updates."),
    entry(Essential, "Install Flatpak", "install_flatpak", "Package Managers",
        "Installs Flatpak, a universal packaging system for Linux applications, providing sandboxed environments."),
    entry(Essential, "Install FUSE", "install_fuse", "System Libraries",
        "Installs FUSE (Filesystem in Userspace), allowing non-privileged users to create their own file systems."),
    entry(Essential, "Install npm", "install_npm", "Development Runtimes",
        "Installs npm (Node Package Manager), a package manager for JavaScript."),
    entry(Essential, "Install pnpm", "install_pnpm", "Development Runtimes",
        "Installs pnpm, a fast, disk-space efficient package manager for Node.js."),
    entry(Essential, "Install jq", "install_jq", "CLI Utilities",
        "Installs jq, a lightweight and flexible command-line JSON processor."),
    entry(Optional, "Install Fisher", "install_fisher", "CLI Utilities",
        "Installs Fisher, a plugin manager for the Fish shell."),
    entry(Optional, "Install Gemini CLI", "install_gemini_cli", "CLI Utilities",
        "Installs the Google Gemini CLI for interacting with Gemini models."),
    entry(Essential, "Set up Git Credential Management", "setup_git_credential_management", "Git Credentials",
        "Sets up Git Credential Manager to securely store and manage Git credentials."),
    header("--- Desktop & Theming ---"),
    entry(Essential, "Install end-4's Hyprland Dots", "install_end4_hyprland_dots", "Hyprland Core",
        "Installs the core Hyprland configuration files and dependencies from end-4."),
    entry(Essential, "Install xorg-xhost and set root access", "install_xorg_xhost_and_xhost_rule", "Hyprland Core",
        "Installs xorg-xhost for X server access control and allows root to connect to the X server."),
    entry(Special, "Load all configurations (GPU, cursor, etc)", "bash {repo_dir}/cli/load_configs.sh", "Hyprland Configuration",
        "Loads and applies system configurations, including GPU settings, cursor themes and other dotfiles."),
    entry(Essential, "Install and Run nwg-displays", "install_nwg_displays", "Hyprland Utilities",
        "Installs and runs nwg-displays, a small utility for managing displays in Wayland compositors like Hyprland."),
    entry(Essential, "Install SDDM Astronaut Theme", "install_sddm_theme", "Login Manager (SDDM)",
        "Installs the Astronaut theme for SDDM, the Simple Desktop Display Manager."),
    entry(Essential, "Install Catppuccin Theme for GRUB", "select_and_install_catppuccin_grub_theme", "Bootloader (GRUB)",
        "Installs the Catppuccin theme for GRUB."),
    entry(Essential, "Adjust GRUB menu resolution", "adjust_grub_menu", "Bootloader (GRUB)",
        "Adjusts the resolution of the GRUB boot menu for better display compatibility."),
    entry(Essential, "Enable os-prober for GRUB", "enable_os_prober", "Bootloader (GRUB)",
        "Enables os-prober in GRUB to detect and list other operating systems installed on the machine."),
    entry(Essential, "Install Catppuccin Fish Theme", "install_catppuccin_fish_theme", "Shell (Fish)",
        "Installs the Catppuccin theme for the Fish shell."),
    entry(Essential, "Install Ulauncher", "install_ulauncher", "Application Launcher",
        "Installs Ulauncher, a fast application launcher for Linux."),
    entry(Essential, "Install Ulauncher Catppuccin Theme", "install_ulauncher_catppuccin_theme", "Application Launcher",
        "Installs the Catppuccin theme for Ulauncher."),
    entry(Optional, "Copy thai_fonts.css for Vesktop", "copy_thai_fonts_css", "Application Tweaks",
        "Copies a custom CSS file to enable proper display of Thai fonts in Vesktop."),
    header("--- Applications ---"),
    entry(Optional, "Install VS Code Insiders", "install_vscode_insiders", "Development Tools",
        "Installs VS Code Insiders, the daily updated build of Visual Studio Code."),
    entry(Essential, "Fix VSCode Insiders permissions", "fix_vscode_permissions", "Development Tools",
        "Fixes permissions for VS Code Insiders to ensure proper functionality."),
    entry(Essential, "Install Vesktop", "install_vesktop", "Communication",
        "Installs Vesktop, a custom Discord client with additional features and optimizations."),
    entry(Essential, "Set up Vesktop Activity Status", "setup_vesktop_rpc", "Communication",
        "Sets up Rich Presence for Vesktop to display your current activity on Discord."),
    entry(Essential, "Install Steam", "install_steam", "Gaming",
        "Installs Steam, the digital distribution platform for video games."),
    entry(Essential, "Install Pinta", "install_pinta", "Graphics & Media",
        "Installs Pinta, a free, open-source drawing and editing program."),
    entry(Essential, "Install Gwenview", "install_gwenview", "Graphics & Media",
        "Installs Gwenview, a fast and easy-to-use image viewer by KDE."),
    entry(Essential, "Install YouTube Music", "install_youtube_music", "Graphics & Media",
        "Installs YouTube Music as a standalone application."),
    entry(Optional, "Install HandBrake", "install_handbrake", "Graphics & Media",
        "Installs HandBrake, a free and open-source video transcoder."),
    entry(Optional, "Install EasyEffects", "install_easyeffects", "Audio",
        "Installs EasyEffects, a PipeWire application for applying audio effects."),
    entry(Optional, "Install n8n", "install_n8n", "Automation",
        "Installs n8n, a workflow automation tool."),
    entry(Optional, "Install Microsoft Edge (Dev)", "install_ms_edge", "Web Browsers",
        "Installs the Microsoft Edge (Dev) browser."),
    entry(Optional, "Install Zen Browser", "install_zen_browser", "Web Browsers",
        "Installs Zen Browser, a privacy-focused web browser."),
    entry(Essential, "Install Switcheroo", "install_switcheroo", "General Utilities",
        "Installs Switcheroo, a simple application switcher for Wayland."),
    entry(Essential, "Install BleachBit", "install_bleachbit", "System Cleanup",
        "Installs BleachBit, a system cleaner to free up disk space and maintain privacy."),
    entry(Essential, "Install QDirStat", "install_qdirstat", "Disk Usage",
        "Installs QDirStat, a graphical disk usage display."),
    entry(Essential, "Install Flatseal", "install_flatseal", "Flatpak Management",
        "Installs Flatseal, a graphical utility to review and modify permissions of Flatpak applications."),
    entry(Optional, "Install rclone", "install_rclone", "Cloud Storage",
        "Installs rclone, a command-line program to manage files on cloud storage."),
    entry(Optional, "Setup Google Drive with rclone", "setup_rclone_gdrive", "Cloud Storage",
        "Sets up Google Drive integration with rclone for cloud storage synchronization."),
    entry(Optional, "Install Waydroid", "install_waydroid", "Android Emulation",
        "Installs Waydroid, a container-based approach to boot a full Android system on Linux."),
    entry(Optional, "Install Waydroid Helper", "install_waydroid_helper", "Android Emulation",
        "Installs Waydroid Helper, a utility to simplify Waydroid management."),
    entry(Essential, "Install Virtualization (libvirt, virt-manager, QEMU)", "install_virt_packages", "Virtualization",
        "Installs libvirt, virt-manager, QEMU, dnsmasq and dmidecode, and enables the libvirtd service."),
    header("--- Hardware & Peripherals ---"),
    entry(Essential, "Install v4l2loopback (for Droidcam/OBS)", "install_v4l2loopback", "Drivers & Modules",
        "Installs v4l2loopback, a kernel module that creates virtual video devices, useful for Droidcam or OBS."),
    entry(Optional, "Install Droidcam", "install_droidcam", "Webcam",
        "Installs Droidcam, allowing you to use your Android phone as a webcam."),
    entry(Optional, "Install MX002 Tablet Driver", "install_mx002_driver", "Drivers & Modules",
        "Installs the drivers for MX002 series drawing tablets."),
    entry(Essential, "Install CoolerControl", "install_coolercontrol", "Hardware Control",
        "Installs CoolerControl, a GUI for controlling fan speeds and RGB lighting on liquid coolers."),
    entry(Optional, "Install Linux Wallpaper Engine", "install_wallpaper_engine", "Wallpaper Engine",
        "Installs Linux Wallpaper Engine, a port of Wallpaper Engine for Linux."),
    entry(Optional, "Install LWE GUI (Manual)", "install_wallpaper_engine_gui_manual", "Wallpaper Engine",
        "Provides instructions for manually installing the GUI for Linux Wallpaper Engine."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn raw(kind: ItemKind, text: &str, func: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            kind,
            text: text.to_string(),
            func: func.map(str::to_string),
            group: None,
            description: None,
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin(Path::new("/opt/az")).expect("built-in table must be valid");
        assert!(!catalog.is_empty());
        assert!(catalog.items().first().map(|i| i.kind) == Some(ItemKind::Header));
    }

    #[test]
    fn test_builtin_resolves_repo_dir() {
        let catalog = Catalog::builtin(Path::new("/opt/az")).unwrap();
        let special: Vec<&Item> = catalog
            .selectable()
            .filter(|i| i.kind == ItemKind::Special)
            .collect();
        assert_eq!(special.len(), 1);
        assert_eq!(
            special[0].command.as_deref(),
            Some("bash '/opt/az'/cli/load_configs.sh")
        );
        assert!(catalog.contains("bash '/opt/az'/cli/load_configs.sh"));
    }

    #[test]
    fn test_repo_dir_with_spaces_stays_one_word() {
        let catalog = Catalog::builtin(Path::new("/opt/az repo")).unwrap();
        let special = catalog
            .selectable()
            .find(|i| i.kind == ItemKind::Special)
            .unwrap();
        assert_eq!(
            special.command.as_deref(),
            Some("bash '/opt/az repo'/cli/load_configs.sh")
        );
    }

    #[test]
    fn test_ids_fall_back_to_position() {
        let catalog = Catalog::from_entries(vec![
            raw(ItemKind::Header, "--- Core ---", None),
            raw(ItemKind::Optional, "No command", None),
            raw(ItemKind::Essential, "A", Some("cmdA")),
        ])
        .unwrap();
        assert!(catalog.contains("item_1"));
        assert!(catalog.contains("cmdA"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_entries(vec![
            raw(ItemKind::Header, "--- Core ---", None),
            raw(ItemKind::Essential, "A", Some("cmdA")),
            raw(ItemKind::Optional, "A again", Some("cmdA")),
        ]);
        match result {
            Err(LauncherError::DuplicateItem { id, first, second }) => {
                assert_eq!(id, "cmdA");
                assert_eq!((first, second), (1, 2));
            }
            other => panic!("expected DuplicateItem, got {:?}", other),
        }
    }

    #[test]
    fn test_headers_are_not_indexed() {
        let catalog = Catalog::from_entries(vec![
            raw(ItemKind::Header, "--- Core ---", None),
            raw(ItemKind::Essential, "A", Some("cmdA")),
        ])
        .unwrap();
        assert!(!catalog.contains("header_0"));
        assert!(catalog.get("header_0").is_none());
        assert_eq!(catalog.items()[0].label, "Core");
    }

    #[test]
    fn test_section_and_group_assignment() {
        let catalog = Catalog::from_entries(vec![
            raw(ItemKind::Optional, "Orphan", Some("orphan")),
            raw(ItemKind::Header, "--- Core System ---", None),
            raw(ItemKind::Essential, "A", Some("cmdA")),
        ])
        .unwrap();
        assert_eq!(catalog.get("orphan").unwrap().section, UNKNOWN_SECTION);
        let a = catalog.get("cmdA").unwrap();
        assert_eq!(a.section, "Core System");
        assert_eq!(a.group, DEFAULT_GROUP);
    }

    #[test]
    fn test_sections_sorted_groups_keep_item_order() {
        let mut entries = vec![
            raw(ItemKind::Header, "--- One ---", None),
            raw(ItemKind::Essential, "z1", Some("z1")),
            raw(ItemKind::Essential, "a1", Some("a1")),
            raw(ItemKind::Essential, "z2", Some("z2")),
            raw(ItemKind::Header, "--- Empty ---", None),
            raw(ItemKind::Header, "--- Two ---", None),
            raw(ItemKind::Optional, "b", Some("b")),
        ];
        entries[1].group = Some("Zeta".to_string());
        entries[2].group = Some("Alpha".to_string());
        entries[3].group = Some("Zeta".to_string());

        let catalog = Catalog::from_entries(entries).unwrap();
        let sections = catalog.sections();
        let names: Vec<&str> = sections.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["One", "Two"]);

        let groups: Vec<&str> = sections[0].groups.iter().map(|g| g.name).collect();
        assert_eq!(groups, vec!["Alpha", "Zeta"]);
        let zeta: Vec<&str> = sections[0].groups[1]
            .items
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(zeta, vec!["z1", "z2"]);
    }

    #[test]
    fn test_display_label_marks_laptop_items() {
        let catalog = Catalog::builtin(Path::new("/repo")).unwrap();
        let tlp = catalog.get("install_power_options").unwrap();
        assert_eq!(tlp.display_label(), "Install Power Options (TLP) (Laptop)");
        let jq = catalog.get("install_jq").unwrap();
        assert_eq!(jq.display_label(), "Install jq");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"type": "header", "text": "--- Core ---"}},
                {{"type": "essential", "text": "A", "func": "cmdA", "group": "G"}},
                {{"type": "essential_variant", "text": "L", "func": "cmdL"}},
                {{"type": "special", "text": "S", "func": "bash {{repo_dir}}/s.sh"}}
            ]"#
        )
        .unwrap();
        file.flush().unwrap();

        let catalog = Catalog::load_from_file(file.path(), &PathBuf::from("/r")).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("cmdL").unwrap().kind, ItemKind::EssentialLaptop);
        assert!(catalog.contains("bash /r/s.sh"));
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not a list }").unwrap();
        file.flush().unwrap();
        let result = Catalog::load_from_file(file.path(), Path::new("/r"));
        assert!(matches!(result, Err(LauncherError::Json(_))));
    }
}
