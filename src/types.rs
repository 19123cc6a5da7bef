//! Type-safe domain types for the launcher
//!
//! Closed sets (item kinds, machine models, presets, terminals) are enums
//! rather than strings so catalog files and config values are validated on
//! parse and matched exhaustively.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Kind of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    /// Section marker, never selectable
    Header,
    /// Selected by every essential preset
    Essential,
    /// Essential only on laptops
    #[serde(rename = "essential_laptop", alias = "essential_variant")]
    #[strum(to_string = "essential_laptop", serialize = "essential_variant")]
    EssentialLaptop,
    Optional,
    /// Not an install function (e.g. a config loader); never preset-selected
    Special,
}

impl ItemKind {
    /// Whether entries of this kind can be selected
    pub fn is_selectable(&self) -> bool {
        !matches!(self, Self::Header)
    }
}

/// Target hardware for the essential preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MachineModel {
    #[default]
    Pc,
    Laptop,
}

impl MachineModel {
    /// Whether the essential preset for this model covers `kind`
    pub fn includes(&self, kind: ItemKind) -> bool {
        match kind {
            ItemKind::Essential => true,
            ItemKind::EssentialLaptop => *self == MachineModel::Laptop,
            ItemKind::Header | ItemKind::Optional | ItemKind::Special => false,
        }
    }
}

/// Bulk selection shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    /// Essentials for the configured machine model
    Essential,
    /// Essentials including laptop-only items, regardless of configuration
    EssentialLaptop,
    All,
    None,
}

/// Terminal emulator used to run the generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Terminal {
    #[default]
    Kitty,
    Alacritty,
    Foot,
    GnomeTerminal,
    Xterm,
}

impl Terminal {
    /// Executable name looked up in PATH
    pub fn program(&self) -> &'static str {
        match self {
            Terminal::Kitty => "kitty",
            Terminal::Alacritty => "alacritty",
            Terminal::Foot => "foot",
            Terminal::GnomeTerminal => "gnome-terminal",
            Terminal::Xterm => "xterm",
        }
    }

    /// Arguments that open a window titled `title` running `command`
    ///
    /// | Terminal         | Form |
    /// |------------------|------|
    /// | `kitty`, `foot`  | `--title T cmd...` |
    /// | `alacritty`      | `--title T -e cmd...` |
    /// | `gnome-terminal` | `--title T -- cmd...` |
    /// | `xterm`          | `-T T -e cmd...` |
    pub fn command_args(&self, title: &str, command: &[String]) -> Vec<String> {
        let mut args = match self {
            Terminal::Kitty | Terminal::Foot => vec!["--title".to_string(), title.to_string()],
            Terminal::Alacritty => vec![
                "--title".to_string(),
                title.to_string(),
                "-e".to_string(),
            ],
            Terminal::GnomeTerminal => vec![
                "--title".to_string(),
                title.to_string(),
                "--".to_string(),
            ],
            Terminal::Xterm => vec!["-T".to_string(), title.to_string(), "-e".to_string()],
        };
        args.extend(command.iter().cloned());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_item_kind_parses_both_laptop_spellings() {
        assert_eq!(
            "essential_laptop".parse::<ItemKind>().unwrap(),
            ItemKind::EssentialLaptop
        );
        assert_eq!(
            "essential_variant".parse::<ItemKind>().unwrap(),
            ItemKind::EssentialLaptop
        );
        assert_eq!(ItemKind::EssentialLaptop.to_string(), "essential_laptop");
    }

    #[test]
    fn test_item_kind_serde_alias() {
        let kind: ItemKind = serde_json::from_str("\"essential_variant\"").unwrap();
        assert_eq!(kind, ItemKind::EssentialLaptop);
        let json = serde_json::to_string(&ItemKind::EssentialLaptop).unwrap();
        assert_eq!(json, "\"essential_laptop\"");
    }

    #[test]
    fn test_only_headers_are_unselectable() {
        for kind in ItemKind::iter() {
            assert_eq!(kind.is_selectable(), kind != ItemKind::Header);
        }
    }

    #[test]
    fn test_machine_model_includes() {
        assert!(MachineModel::Pc.includes(ItemKind::Essential));
        assert!(!MachineModel::Pc.includes(ItemKind::EssentialLaptop));
        assert!(MachineModel::Laptop.includes(ItemKind::Essential));
        assert!(MachineModel::Laptop.includes(ItemKind::EssentialLaptop));
        for model in MachineModel::iter() {
            assert!(!model.includes(ItemKind::Optional));
            assert!(!model.includes(ItemKind::Special));
            assert!(!model.includes(ItemKind::Header));
        }
    }

    #[test]
    fn test_preset_strings() {
        assert_eq!(Preset::EssentialLaptop.to_string(), "essential-laptop");
        assert_eq!("all".parse::<Preset>().unwrap(), Preset::All);
        assert!("everything".parse::<Preset>().is_err());
    }

    #[test]
    fn test_terminal_serde_matches_display() {
        for terminal in Terminal::iter() {
            let json = serde_json::to_string(&terminal).unwrap();
            assert_eq!(json, format!("\"{}\"", terminal));
        }
        assert_eq!(Terminal::GnomeTerminal.to_string(), "gnome-terminal");
    }

    #[test]
    fn test_terminal_command_args() {
        let cmd = vec!["bash".to_string(), "/tmp/x.sh".to_string()];
        assert_eq!(
            Terminal::Kitty.command_args("Installation Process", &cmd),
            vec!["--title", "Installation Process", "bash", "/tmp/x.sh"]
        );
        assert_eq!(
            Terminal::Xterm.command_args("T", &cmd),
            vec!["-T", "T", "-e", "bash", "/tmp/x.sh"]
        );
        assert_eq!(
            Terminal::GnomeTerminal.command_args("T", &cmd),
            vec!["--title", "T", "--", "bash", "/tmp/x.sh"]
        );
    }
}
