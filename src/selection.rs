//! Selection model over a catalog.
//!
//! Tracks which selectable items are checked, keyed by item id. Selection
//! order is never recorded: commands always come back in catalog order, so
//! an item that must run after another only has to be placed after it in
//! the table.

use std::collections::HashSet;
use tracing::debug;

use crate::catalog::{Catalog, Item};
use crate::error::{LauncherError, Result};
use crate::types::{MachineModel, Preset};

/// Per-session selection state
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    catalog: &'a Catalog,
    selected: HashSet<String>,
}

impl<'a> Selection<'a> {
    /// Empty selection over `catalog`
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selected: HashSet::new(),
        }
    }

    /// Mark one item selected or unselected
    ///
    /// Fails with `UnknownItem`, leaving the state untouched, if `id` is not
    /// a selectable catalog item.
    pub fn set_selected(&mut self, id: &str, selected: bool) -> Result<()> {
        if !self.catalog.contains(id) {
            return Err(LauncherError::unknown_item(id));
        }
        if selected {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
        Ok(())
    }

    /// Flip one item, returning its new state
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let now = !self.is_selected(id);
        self.set_selected(id, now)?;
        Ok(now)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn select_all(&mut self) {
        self.selected = self
            .catalog
            .selectable()
            .map(|item| item.id.clone())
            .collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Replace the selection with the essential items for `model`
    ///
    /// `Pc` selects `essential` items; `Laptop` adds `essential_laptop`.
    pub fn select_essential(&mut self, model: MachineModel) {
        self.deselect_all();
        self.selected = self
            .catalog
            .selectable()
            .filter(|item| model.includes(item.kind))
            .map(|item| item.id.clone())
            .collect();
        debug!(
            "Essential preset for {}: {} item(s)",
            model,
            self.selected.len()
        );
    }

    /// Apply a bulk preset; `model` is used by `Preset::Essential`
    pub fn apply_preset(&mut self, preset: Preset, model: MachineModel) {
        match preset {
            Preset::Essential => self.select_essential(model),
            Preset::EssentialLaptop => self.select_essential(MachineModel::Laptop),
            Preset::All => self.select_all(),
            Preset::None => self.deselect_all(),
        }
    }

    /// Selected items in catalog order
    pub fn selected_items(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.catalog
            .selectable()
            .filter(move |item| self.selected.contains(&item.id))
    }

    /// Ids of selected items in catalog order
    pub fn selected_ids(&self) -> Vec<&'a str> {
        self.selected_items().map(|item| item.id.as_str()).collect()
    }

    /// Commands of selected items, in catalog order
    ///
    /// Items without a command contribute nothing.
    pub fn selected_commands(&self) -> Vec<String> {
        self.selected_items()
            .filter_map(|item| item.command.clone())
            .collect()
    }

    /// Commands to install, or `EmptySelection` if there are none
    pub fn commands_for_install(&self) -> Result<Vec<String>> {
        let commands = self.selected_commands();
        if commands.is_empty() {
            return Err(LauncherError::EmptySelection);
        }
        Ok(commands)
    }

    /// Number of selected items
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
