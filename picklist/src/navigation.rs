//! Keyboard and pointer navigation over the current items.
//!
//! The [`Navigator`] owns the open/closed state and the highlighted row. It
//! never touches the selection itself: keys that confirm or cancel come back
//! as a [`NavCommand`] for the owner to apply. Visual side effects go through
//! an injected [`ViewPort`].

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
    };
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    Enter,
    Escape,
    Backspace,
    /// Focus leaves the widget; an open panel closes without committing.
    Tab,
    Up,
    Down,
    Home,
    End,
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

impl From<Key> for KeyCombo {
    fn from(key: Key) -> Self {
        Self::key(key)
    }
}

/// Panel state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

/// What currently holds the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// A row, by position in the current items.
    Row(usize),
    /// The filter's clear control.
    ClearControl,
}

/// View-layer side effects requested by the navigator.
pub trait ViewPort {
    /// Mark a row as highlighted (`None` clears the row highlight).
    fn highlight_row(&mut self, index: Option<usize>);

    /// Bring a row into the visible part of the panel.
    fn scroll_row_into_view(&mut self, index: usize);
}

/// A view port that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopViewPort;

impl ViewPort for NoopViewPort {
    fn highlight_row(&mut self, _index: Option<usize>) {}

    fn scroll_row_into_view(&mut self, _index: usize) {}
}

/// Follow-up the owner must perform after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Key not handled.
    Ignored,
    /// Handled entirely by the navigator.
    Handled,
    /// Open the panel.
    Open,
    /// Confirm the row at this position.
    Commit(usize),
    /// Close without confirming.
    Cancel,
}

/// Navigation state machine.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavState,
    highlighted: usize,
    on_clear_control: bool,
    /// Set when the panel was opened from the keyboard; hover is ignored
    /// until the pointer moves again.
    suppress_hover: bool,
}

impl Navigator {
    /// Create a closed navigator with the highlight on the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current open/closed state.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Check if the panel is open.
    pub fn is_open(&self) -> bool {
        self.state == NavState::Open
    }

    /// Highlighted position in the current items.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// What the highlight is on: a row or the clear control.
    pub fn highlight(&self) -> Highlight {
        if self.on_clear_control {
            Highlight::ClearControl
        } else {
            Highlight::Row(self.highlighted)
        }
    }

    /// Whether hover is ignored until the pointer moves.
    pub fn hover_suppressed(&self) -> bool {
        self.suppress_hover
    }

    /// Transition to `Open` with the highlight on `index`.
    pub fn open(&mut self, index: usize, via_keyboard: bool, view: &mut dyn ViewPort) {
        self.state = NavState::Open;
        self.suppress_hover = via_keyboard;
        self.set_highlight(index, view);
        view.scroll_row_into_view(index);
        log::debug!("[picklist] opened (keyboard={}) highlight={}", via_keyboard, index);
    }

    /// Transition to `Closed`.
    pub fn close(&mut self) {
        if self.state == NavState::Open {
            log::debug!("[picklist] closed");
        }
        self.state = NavState::Closed;
        self.on_clear_control = false;
        self.suppress_hover = false;
    }

    /// Move the highlight to a row.
    pub fn set_highlight(&mut self, index: usize, view: &mut dyn ViewPort) {
        self.highlighted = index;
        self.on_clear_control = false;
        view.highlight_row(Some(index));
    }

    /// Move the highlight onto the clear control.
    pub fn highlight_clear_control(&mut self, view: &mut dyn ViewPort) {
        self.on_clear_control = true;
        view.highlight_row(None);
    }

    /// Pointer hovered the row at `index`.
    ///
    /// Only single-select lists follow hover, and only once the pointer has
    /// moved since the panel was opened from the keyboard.
    pub fn hover(&mut self, index: usize, count: usize, multi: bool, view: &mut dyn ViewPort) -> bool {
        if multi || self.suppress_hover || index >= count || !self.is_open() {
            return false;
        }
        self.set_highlight(index, view);
        true
    }

    /// Pointer moved; hover highlighting resumes.
    pub fn pointer_moved(&mut self) {
        self.suppress_hover = false;
    }

    /// Handle a navigation key against `count` current items.
    pub fn on_key(&mut self, key: &KeyCombo, count: usize, view: &mut dyn ViewPort) -> NavCommand {
        if key.modifiers.ctrl || key.modifiers.alt {
            return NavCommand::Ignored;
        }

        log::trace!("[picklist] key {:?} state={:?} highlight={}", key.key, self.state, self.highlighted);

        match (self.state, key.key) {
            (NavState::Closed, Key::Down | Key::Enter | Key::Char(' ')) => NavCommand::Open,
            (NavState::Closed, _) => NavCommand::Ignored,
            (NavState::Open, Key::Down) => {
                if count > 0 {
                    self.step((self.highlighted + 1) % count, view);
                }
                NavCommand::Handled
            }
            (NavState::Open, Key::Up) => {
                if count > 0 {
                    self.step((self.highlighted.min(count - 1) + count - 1) % count, view);
                }
                NavCommand::Handled
            }
            (NavState::Open, Key::Home) => {
                if count > 0 {
                    self.step(0, view);
                }
                NavCommand::Handled
            }
            (NavState::Open, Key::End) => {
                if count > 0 {
                    self.step(count - 1, view);
                }
                NavCommand::Handled
            }
            (NavState::Open, Key::Enter) => {
                if self.on_clear_control || self.highlighted >= count {
                    NavCommand::Handled
                } else {
                    NavCommand::Commit(self.highlighted)
                }
            }
            (NavState::Open, Key::Escape | Key::Tab) => NavCommand::Cancel,
            (NavState::Open, _) => NavCommand::Ignored,
        }
    }

    fn step(&mut self, index: usize, view: &mut dyn ViewPort) {
        self.set_highlight(index, view);
        view.scroll_row_into_view(index);
    }
}
