//! Headless core for filterable, keyboard-navigable selection lists.
//!
//! `picklist` holds the state behind a dropdown/combobox: the item collection
//! and its ordering, fuzzy filtering, single/multi selection, a keyboard and
//! pointer navigation state machine, and placement of the floating panel
//! relative to its trigger. Rendering is left to the host, which reads state
//! through [`Picklist`] and receives side effects through [`ViewPort`].

pub mod collection;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod item;
pub mod navigation;
pub mod picklist;
pub mod position;
pub mod selection;

pub use error::{PicklistError, Result};
pub use navigation::ViewPort;
pub use picklist::Picklist;

pub mod prelude {
    pub use crate::collection::{ItemCollection, SortOrder, compare_labels};
    pub use crate::config::{Flavor, PicklistConfig, PositionConfig};
    pub use crate::error::{PicklistError, Result};
    pub use crate::events::{ChangeEvent, EventResult, PicklistEvent};
    pub use crate::filter::{FilterEngine, NucleoRanker, RankError, RankOptions, Ranked, Ranker};
    pub use crate::item::{Item, ItemNode, PicklistItem};
    pub use crate::navigation::{Highlight, Key, KeyCombo, Modifiers, NavState, ViewPort};
    pub use crate::picklist::Picklist;
    pub use crate::position::{Geometry, Horizontal, Placement, PositionSolver, Rect, Vertical, ViewportSize};
    pub use crate::selection::{SelectionMode, SelectionModel};
}
