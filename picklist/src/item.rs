//! Items and the entries callers hand to a picklist.

use serde::Deserialize;

/// A single option in the list.
///
/// Items are owned by the caller; the core only annotates `selected` and
/// assigns the positional `index` when the collection is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Caller-defined identity.
    pub id: String,
    /// Display text, used for sorting and filtering.
    pub label: String,
    /// Rendered inner content. Used as filter text when `label` is empty.
    pub content: String,
    /// Whether the item is currently selected.
    pub selected: bool,
    /// Disabled items can never become selected.
    pub disabled: bool,
    /// Skipped by "select all".
    pub exclude_from_select_all: bool,
    /// Position in the collection, reassigned on every rebuild.
    #[serde(skip)]
    pub index: usize,
}

impl Item {
    /// Create an item whose id and label are the same text.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: label.clone(),
            label,
            ..Default::default()
        }
    }

    /// Create an item with a separate id.
    pub fn with_id(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the rendered content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Mark the item as selected.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Mark the item as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Exclude the item from "select all".
    pub fn excluded_from_select_all(mut self) -> Self {
        self.exclude_from_select_all = true;
        self
    }

    /// Text used when matching a query against this item.
    pub fn filter_text(&self) -> &str {
        if self.label.is_empty() {
            &self.content
        } else {
            &self.label
        }
    }
}

/// An entry supplied to `set_items`.
///
/// Hosts that build their option lists from loosely typed children (markup
/// nodes, deserialized documents) may pass entries that are not options at
/// all. Those are rejected by the collection as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemNode {
    /// A picklist option.
    Item(Item),
    /// Anything else, tagged with the kind the host reported.
    Foreign { kind: String },
}

impl ItemNode {
    /// Wrap a foreign entry.
    pub fn foreign(kind: impl Into<String>) -> Self {
        Self::Foreign { kind: kind.into() }
    }
}

impl From<Item> for ItemNode {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

/// Trait for values that can be displayed as picklist options.
///
/// # Example
///
/// ```
/// use picklist::item::PicklistItem;
///
/// struct Country {
///     code: &'static str,
///     name: &'static str,
/// }
///
/// impl PicklistItem for Country {
///     fn picklist_id(&self) -> String {
///         self.code.to_string()
///     }
///
///     fn picklist_label(&self) -> String {
///         self.name.to_string()
///     }
/// }
///
/// let item = Country { code: "BE", name: "Belgium" }.to_item();
/// assert_eq!(item.id, "BE");
/// ```
pub trait PicklistItem {
    /// Unique identifier for this item.
    fn picklist_id(&self) -> String;

    /// Display text for this item.
    fn picklist_label(&self) -> String;

    /// Whether the item starts out disabled.
    fn picklist_disabled(&self) -> bool {
        false
    }

    /// Convert into a collection item.
    fn to_item(&self) -> Item {
        Item {
            disabled: self.picklist_disabled(),
            ..Item::with_id(self.picklist_id(), self.picklist_label())
        }
    }
}

impl PicklistItem for String {
    fn picklist_id(&self) -> String {
        self.clone()
    }

    fn picklist_label(&self) -> String {
        self.clone()
    }
}

impl PicklistItem for &str {
    fn picklist_id(&self) -> String {
        (*self).to_string()
    }

    fn picklist_label(&self) -> String {
        (*self).to_string()
    }
}

// (id, label) tuples
impl<S1, S2> PicklistItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn picklist_id(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn picklist_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}
