//! Picklist configuration.

use serde::Deserialize;

use crate::collection::SortOrder;
use crate::error::{PicklistError, Result};
use crate::selection::SelectionMode;

/// The two widget surfaces sharing this core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    /// Single-select only; never emits `Cleared`.
    #[default]
    Select,
    /// Single or multi-select; emits `Cleared` when the filter is cleared.
    MultiSelect,
}

/// Panel placement settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    /// Upper bound on the panel height.
    ///
    /// Default: 580
    pub max_height: f64,

    /// Gap kept between the panel and the viewport edges.
    ///
    /// Default: 12
    pub margin: f64,

    /// Always anchor the panel to the trigger's right edge.
    pub force_right: bool,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            max_height: 580.0,
            margin: 12.0,
            force_right: false,
        }
    }
}

impl PositionConfig {
    /// Set the maximum panel height.
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set the viewport margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Always anchor the panel to the trigger's right edge.
    pub fn force_right(mut self) -> Self {
        self.force_right = true;
        self
    }
}

/// Configuration for a [`Picklist`](crate::Picklist).
///
/// # Example
///
/// ```
/// use picklist::collection::SortOrder;
/// use picklist::config::{Flavor, PicklistConfig};
/// use picklist::selection::SelectionMode;
///
/// let config = PicklistConfig::new(Flavor::MultiSelect)
///     .with_selection_mode(SelectionMode::Multi)
///     .with_sort(SortOrder::Asc)
///     .filterable();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PicklistConfig {
    pub flavor: Flavor,
    pub selection_mode: SelectionMode,
    pub sort: SortOrder,
    /// Whether typed text filters the list.
    pub filterable: bool,
    /// Shown by the view when no item matches.
    ///
    /// Default: "No results found"
    pub no_results_message: String,
    /// A disabled picklist ignores all input.
    pub disabled: bool,
    /// Maximum number of filter results.
    ///
    /// Default: 50
    pub result_limit: usize,
    pub position: PositionConfig,
}

impl Default for PicklistConfig {
    fn default() -> Self {
        Self {
            flavor: Flavor::default(),
            selection_mode: SelectionMode::default(),
            sort: SortOrder::default(),
            filterable: false,
            no_results_message: "No results found".to_string(),
            disabled: false,
            result_limit: 50,
            position: PositionConfig::default(),
        }
    }
}

impl PicklistConfig {
    /// Create a config with defaults for the given flavor.
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            ..Default::default()
        }
    }

    /// Set the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Enable text filtering.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Start disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the message shown when nothing matches.
    pub fn with_no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = message.into();
        self
    }

    /// Set the maximum number of ranked results.
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Set the placement settings.
    pub fn with_position(mut self, position: PositionConfig) -> Self {
        self.position = position;
        self
    }

    /// Check the combination of settings.
    pub fn validate(&self) -> Result<()> {
        if self.flavor == Flavor::Select && self.selection_mode == SelectionMode::Multi {
            return Err(PicklistError::MultiSelectUnsupported);
        }
        Ok(())
    }
}
