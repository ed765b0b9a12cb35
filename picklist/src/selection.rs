//! Selection state and the single/multi selection rules.
//!
//! The `selected` flags on the collection's items are the single source of
//! truth. The model applies the mode's invariants when toggling and builds
//! change events by rescanning the collection.

use serde::Deserialize;

use crate::collection::ItemCollection;
use crate::events::ChangeEvent;

/// Selection mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one item selected.
    #[default]
    Single,
    /// Any subset of items selected.
    Multi,
}

/// Applies selection operations to an [`ItemCollection`].
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    mode: SelectionMode,
    /// Collection index of the last confirmed choice.
    last_committed: Option<usize>,
}

impl SelectionModel {
    /// Create a selection model with nothing committed.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            last_committed: None,
        }
    }

    /// Selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Check if several items may be selected at once.
    pub fn is_multi(&self) -> bool {
        self.mode == SelectionMode::Multi
    }

    /// Collection index of the last confirmed choice, if any.
    pub fn last_committed(&self) -> Option<usize> {
        self.last_committed
    }

    /// Re-derive state after the item set was replaced.
    ///
    /// Disabled items lose their `selected` flag; in single-select mode only
    /// the first selected item survives. The committed index becomes the first
    /// selected item.
    pub fn rebuild(&mut self, items: &mut ItemCollection) {
        let mut seen_selected = false;
        for item in items.iter_mut() {
            if !item.selected {
                continue;
            }
            if item.disabled {
                log::warn!("[picklist] disabled item '{}' supplied as selected; clearing", item.id);
                item.selected = false;
            } else if seen_selected && self.mode == SelectionMode::Single {
                log::warn!("[picklist] extra selected item '{}' in single-select mode; clearing", item.id);
                item.selected = false;
            } else {
                seen_selected = true;
            }
        }
        self.last_committed = items.selected_indices().first().copied();
    }

    /// Toggle the item at `index`.
    ///
    /// In single-select mode every other item is deselected first and the
    /// target becomes the committed index. Returns `None` when the item is
    /// missing or disabled; nothing changes in that case.
    pub fn select(&mut self, items: &mut ItemCollection, index: usize) -> Option<ChangeEvent> {
        match items.get(index) {
            Some(item) if !item.disabled => {}
            Some(item) => {
                log::debug!("[picklist] ignoring select of disabled item '{}'", item.id);
                return None;
            }
            None => return None,
        }

        if self.mode == SelectionMode::Single {
            for item in items.iter_mut().filter(|item| item.index != index) {
                item.selected = false;
            }
            self.last_committed = Some(index);
        }

        if let Some(item) = items.get_mut(index) {
            item.selected = !item.selected;
            log::debug!("[picklist] item '{}' selected={}", item.id, item.selected);
        }

        Some(ChangeEvent::new(items.selected_items()))
    }

    /// Select every enabled item not excluded from "select all".
    ///
    /// Multi-select only; returns `None` in single-select mode.
    pub fn select_all(&mut self, items: &mut ItemCollection) -> Option<ChangeEvent> {
        if self.mode != SelectionMode::Multi {
            return None;
        }
        for item in items.iter_mut() {
            item.selected = !item.disabled && !item.exclude_from_select_all;
        }
        Some(ChangeEvent::new(items.selected_items()))
    }

    /// Clear the selection.
    ///
    /// Multi-select only; returns `None` in single-select mode.
    pub fn select_none(&mut self, items: &mut ItemCollection) -> Option<ChangeEvent> {
        if self.mode != SelectionMode::Multi {
            return None;
        }
        for item in items.iter_mut() {
            item.selected = false;
        }
        Some(ChangeEvent::new(Vec::new()))
    }
}
