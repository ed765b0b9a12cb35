//! The picklist widget core.
//!
//! [`Picklist`] wires the item collection, filter engine, selection model,
//! navigator and position solver together. Every operation runs to completion
//! before returning, so the host observes a consistent state between input
//! events. Events produced along the way are queued and handed out by
//! [`Picklist::drain_events`].
//!
//! # Example
//!
//! ```
//! use picklist::prelude::*;
//!
//! let mut picklist = Picklist::new(PicklistConfig::default().with_sort(SortOrder::Asc))?;
//! picklist.set_items(["Banana", "apple", "Cherry"].map(|s| s.to_item()))?;
//!
//! picklist.on_key(Key::Down)?;
//! picklist.on_key(Key::Down)?;
//! picklist.on_key(Key::Enter)?;
//!
//! assert_eq!(picklist.display_text(), "Banana");
//! assert!(!picklist.is_open());
//! # Ok::<(), picklist::PicklistError>(())
//! ```

use crate::collection::ItemCollection;
use crate::config::{Flavor, PicklistConfig};
use crate::error::Result;
use crate::events::{ChangeEvent, EventResult, PicklistEvent};
use crate::filter::{FilterEngine, HighlightReset, NucleoRanker, RankOptions, Ranker};
use crate::item::{Item, ItemNode};
use crate::navigation::{Highlight, Key, KeyCombo, NavCommand, NavState, Navigator, NoopViewPort, ViewPort};
use crate::position::{Geometry, Placement, PositionSolver};
use crate::selection::{SelectionMode, SelectionModel};

/// A filterable, keyboard-navigable selection list.
pub struct Picklist {
    config: PicklistConfig,
    collection: ItemCollection,
    filter: FilterEngine,
    selection: SelectionModel,
    nav: Navigator,
    solver: PositionSolver,
    ranker: Box<dyn Ranker>,
    view: Box<dyn ViewPort>,
    /// Active filter query.
    query: String,
    /// Text shown in the trigger.
    display_text: String,
    /// Collection indices of the current items.
    current: Vec<usize>,
    geometry: Option<Geometry>,
    placement: Option<Placement>,
    events: Vec<PicklistEvent>,
}

impl std::fmt::Debug for Picklist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picklist")
            .field("config", &self.config)
            .field("collection", &self.collection)
            .field("nav", &self.nav)
            .field("query", &self.query)
            .field("current", &self.current)
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

impl Picklist {
    /// Create an empty picklist.
    ///
    /// Fails when the configuration asks the single-select flavor for
    /// multi-select.
    pub fn new(config: PicklistConfig) -> Result<Self> {
        config.validate()?;
        let options = RankOptions {
            limit: config.result_limit,
            ..Default::default()
        };
        Ok(Self {
            collection: ItemCollection::new(config.sort),
            filter: FilterEngine::new(options),
            selection: SelectionModel::new(config.selection_mode),
            nav: Navigator::new(),
            solver: PositionSolver::new(config.position),
            ranker: Box::new(NucleoRanker),
            view: Box::new(NoopViewPort),
            query: String::new(),
            display_text: String::new(),
            current: Vec::new(),
            geometry: None,
            placement: None,
            events: Vec::new(),
            config,
        })
    }

    /// Replace the ranking collaborator.
    pub fn with_ranker(mut self, ranker: impl Ranker + 'static) -> Self {
        self.ranker = Box::new(ranker);
        self
    }

    /// Attach the view port receiving highlight and scroll requests.
    pub fn with_view_port(mut self, view: impl ViewPort + 'static) -> Self {
        self.view = Box::new(view);
        self
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// Configuration the picklist was built with.
    pub fn config(&self) -> &PicklistConfig {
        &self.config
    }

    /// The full collection in collection order.
    pub fn items(&self) -> &[Item] {
        self.collection.items()
    }

    /// The current (filtered) items in display order.
    pub fn current_items(&self) -> Vec<&Item> {
        self.current
            .iter()
            .filter_map(|&index| self.collection.get(index))
            .collect()
    }

    /// Labels of the current items, mostly useful for assertions and logs.
    pub fn current_labels(&self) -> Vec<&str> {
        self.current_items().into_iter().map(|item| item.label.as_str()).collect()
    }

    /// Selected items in collection order.
    pub fn selected_items(&self) -> Vec<Item> {
        self.collection.selected_items()
    }

    /// Highlighted position in the current items.
    pub fn highlighted(&self) -> usize {
        self.nav.highlighted()
    }

    /// What the highlight is on: a row or the clear control.
    pub fn highlight(&self) -> Highlight {
        self.nav.highlight()
    }

    /// Collection index of the last confirmed choice.
    pub fn last_committed(&self) -> Option<usize> {
        self.selection.last_committed()
    }

    /// Current open/closed state.
    pub fn state(&self) -> NavState {
        self.nav.state()
    }

    /// Check if the panel is open.
    pub fn is_open(&self) -> bool {
        self.nav.is_open()
    }

    /// Active filter query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Text shown in the trigger.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Placement from the most recent solve.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Message the view shows when nothing matches.
    pub fn no_results_message(&self) -> Option<&str> {
        self.current
            .is_empty()
            .then_some(self.config.no_results_message.as_str())
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<PicklistEvent> {
        std::mem::take(&mut self.events)
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Replace the item set and rebuild all derived state.
    ///
    /// The new set is validated, sorted, filtered with the active query and
    /// only then swapped in; on error the picklist is left untouched.
    pub fn set_items<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<ItemNode>,
    {
        let mut collection = ItemCollection::new(self.config.sort);
        collection.set_items(entries)?;

        let mut selection = self.selection.clone();
        selection.rebuild(&mut collection);

        let mut filter = self.filter.clone();
        filter.reset(collection.len());
        let outcome = filter.filter(&self.query, collection.items(), self.ranker.as_ref())?;

        self.collection = collection;
        self.selection = selection;
        self.filter = filter;
        self.current = outcome.items;
        log::debug!("[picklist] rebuilt with {} items", self.collection.len());

        if self.query.is_empty() {
            self.display_text = self.selected_label();
        }
        let position = self.committed_position();
        self.nav.set_highlight(position, self.view.as_mut());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Filter the list with `query`.
    ///
    /// Ignored unless the picklist is filterable. On a ranker error nothing
    /// changes.
    pub fn set_query(&mut self, query: impl Into<String>) -> Result<()> {
        self.enter_query(query.into(), false)
    }

    fn enter_query(&mut self, query: String, open: bool) -> Result<()> {
        if !self.config.filterable {
            log::debug!("[picklist] not filterable, ignoring query");
            return Ok(());
        }
        self.refilter(query, open)?;
        self.display_text = self.query.clone();
        Ok(())
    }

    /// Clear the filter text.
    ///
    /// The multi-select flavor announces this with a `Cleared` event.
    pub fn clear_filter(&mut self) -> Result<()> {
        self.reset_query()?;
        self.display_text.clear();
        if self.config.flavor == Flavor::MultiSelect {
            self.events.push(PicklistEvent::Cleared);
        }
        Ok(())
    }

    fn reset_query(&mut self) -> Result<()> {
        self.refilter(String::new(), false)
    }

    /// Filter with `query` and apply the result.
    ///
    /// The pass runs before any state is written, so a ranker error leaves
    /// the picklist as it was. With `open`, the panel opens between the pass
    /// and applying it, letting the pass decide the highlight.
    fn refilter(&mut self, query: String, open: bool) -> Result<()> {
        let outcome = self
            .filter
            .filter(&query, self.collection.items(), self.ranker.as_ref())?;
        if open {
            self.open_panel(true);
        }
        self.query = query;
        self.current = outcome.items;

        let position = match outcome.reset {
            HighlightReset::ToCommitted => self.committed_position(),
            HighlightReset::ToFirst => 0,
            HighlightReset::Keep => self.nav.highlighted().min(self.current.len().saturating_sub(1)),
        };
        if self.nav.highlight() != Highlight::Row(position) {
            self.nav.set_highlight(position, self.view.as_mut());
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    /// Open the panel (pointer or programmatic).
    pub fn open(&mut self) {
        self.open_panel(false);
    }

    /// Close the panel, keeping the current highlight.
    pub fn close(&mut self) {
        self.nav.close();
    }

    /// Toggle the panel open/closed.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    fn open_panel(&mut self, via_keyboard: bool) {
        if self.config.disabled || self.is_open() {
            return;
        }
        let position = match self.selection.mode() {
            SelectionMode::Single => self.committed_position(),
            SelectionMode::Multi => 0,
        };
        self.nav.open(position, via_keyboard, self.view.as_mut());
        self.reposition();
    }

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    /// Handle a key press.
    pub fn on_key(&mut self, key: impl Into<KeyCombo>) -> Result<EventResult> {
        let key = key.into();
        if self.config.disabled || key.modifiers.ctrl || key.modifiers.alt {
            return Ok(EventResult::Ignored);
        }

        if self.config.filterable {
            match key.key {
                Key::Char(c) => {
                    let mut query = self.query.clone();
                    query.push(c);
                    self.enter_query(query, true)?;
                    return Ok(EventResult::Consumed);
                }
                Key::Backspace => {
                    let mut query = self.query.clone();
                    if query.pop().is_some() {
                        self.enter_query(query, false)?;
                    }
                    return Ok(EventResult::Consumed);
                }
                _ => {}
            }
        }

        let command = self.nav.on_key(&key, self.current.len(), self.view.as_mut());
        match command {
            NavCommand::Ignored => Ok(EventResult::Ignored),
            NavCommand::Handled => Ok(EventResult::Consumed),
            NavCommand::Open => {
                self.open_panel(true);
                Ok(EventResult::Consumed)
            }
            NavCommand::Commit(position) => {
                self.commit(position)?;
                Ok(EventResult::Consumed)
            }
            NavCommand::Cancel => {
                self.cancel()?;
                Ok(EventResult::Consumed)
            }
        }
    }

    /// Confirm the row at `position` in the current items.
    fn commit(&mut self, position: usize) -> Result<()> {
        let Some(&index) = self.current.get(position) else {
            return Ok(());
        };
        let Some(event) = self.selection.select(&mut self.collection, index) else {
            return Ok(());
        };
        self.push_change(event);
        self.nav.set_highlight(position, self.view.as_mut());

        if !self.selection.is_multi() {
            self.nav.close();
            self.reset_query()?;
            self.display_text = self.selected_label();
        }
        Ok(())
    }

    /// Close without confirming: restore the committed highlight and drop
    /// the filter.
    fn cancel(&mut self) -> Result<()> {
        self.nav.close();
        self.reset_query()?;
        self.display_text = self.selected_label();
        let position = self.committed_position();
        self.nav.set_highlight(position, self.view.as_mut());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Pointer
    // -------------------------------------------------------------------------

    /// Pointer moved over the panel.
    pub fn pointer_moved(&mut self) {
        self.nav.pointer_moved();
    }

    /// Pointer hovered the row at `position`.
    pub fn hover_row(&mut self, position: usize) -> EventResult {
        let multi = self.selection.is_multi();
        if self.nav.hover(position, self.current.len(), multi, self.view.as_mut()) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Focus or pointer moved onto the filter's clear control.
    pub fn hover_clear_control(&mut self) {
        if self.is_open() {
            self.nav.highlight_clear_control(self.view.as_mut());
        }
    }

    /// Row at `position` was clicked.
    pub fn click_row(&mut self, position: usize) -> Result<EventResult> {
        if self.config.disabled || !self.is_open() || position >= self.current.len() {
            return Ok(EventResult::Ignored);
        }
        self.commit(position)?;
        Ok(EventResult::Consumed)
    }

    /// Click at viewport coordinates.
    ///
    /// Clicks outside both the trigger and the panel close the panel; other
    /// clicks are left to the row and trigger handlers.
    pub fn click_at(&mut self, x: f64, y: f64) -> Result<EventResult> {
        match self.geometry {
            Some(geometry) if self.is_open() && geometry.is_outside(x, y) => {
                self.click_outside()?;
                Ok(EventResult::Consumed)
            }
            _ => Ok(EventResult::Ignored),
        }
    }

    /// Click landed outside the widget.
    ///
    /// Closes the panel, drops the filter and puts the selected item's text
    /// back into the trigger.
    pub fn click_outside(&mut self) -> Result<()> {
        if !self.is_open() {
            return Ok(());
        }
        self.nav.close();
        self.reset_query()?;
        self.display_text = self.selected_label();
        Ok(())
    }

    /// Something outside the widget scrolled.
    pub fn scroll_outside(&mut self) -> Result<()> {
        self.click_outside()
    }

    // -------------------------------------------------------------------------
    // Bulk selection controls
    // -------------------------------------------------------------------------

    /// "Select all" control (multi-select only).
    pub fn select_all(&mut self) {
        if let Some(event) = self.selection.select_all(&mut self.collection) {
            self.push_change(event);
        }
    }

    /// "Select none" control (multi-select only).
    pub fn select_none(&mut self) {
        if let Some(event) = self.selection.select_none(&mut self.collection) {
            self.push_change(event);
        }
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    /// Record measured geometry; re-solves placement while open.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
        if self.is_open() {
            self.reposition();
        }
    }

    /// The viewport was resized.
    pub fn resize(&mut self, geometry: Geometry) {
        self.set_geometry(geometry);
    }

    fn reposition(&mut self) {
        if let Some(geometry) = &self.geometry {
            self.placement = Some(self.solver.solve_geometry(geometry));
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Position of the committed item within the current items, or 0.
    fn committed_position(&self) -> usize {
        self.selection
            .last_committed()
            .and_then(|index| self.current.iter().position(|&i| i == index))
            .unwrap_or(0)
    }

    fn selected_label(&self) -> String {
        self.collection
            .items()
            .iter()
            .find(|item| item.selected)
            .map(|item| item.label.clone())
            .unwrap_or_default()
    }

    fn push_change(&mut self, event: ChangeEvent) {
        log::debug!("[picklist] change: {:?}", event.ids());
        self.events.push(PicklistEvent::Change(event));
    }
}
