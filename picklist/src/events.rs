//! Events emitted by a picklist and the result of input handling.
//!
//! Operations push events onto the picklist's queue; the host drains the
//! queue after each input event and dispatches them to its own listeners.

use crate::item::Item;

/// Payload of a `change` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Selected items in collection order.
    pub selected: Vec<Item>,
    /// Passed through for hosts that forward the event to cancelable
    /// listeners; the picklist itself never reads it.
    pub cancelable: bool,
}

impl ChangeEvent {
    /// Create a change event for the given selection.
    pub fn new(selected: Vec<Item>) -> Self {
        Self {
            selected,
            cancelable: true,
        }
    }

    /// Ids of the selected items.
    pub fn ids(&self) -> Vec<&str> {
        self.selected.iter().map(|item| item.id.as_str()).collect()
    }
}

/// An event pushed by a picklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PicklistEvent {
    /// The selection changed.
    Change(ChangeEvent),
    /// The filter text was cleared through the clear control.
    Cleared,
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
