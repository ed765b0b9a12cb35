//! Item collection: validation, ordering and index assignment.

use std::cmp::Ordering;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::{PicklistError, Result};
use crate::item::{Item, ItemNode};

/// Ordering applied to the collection whenever the item set changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep the caller-supplied order.
    #[default]
    None,
    /// Ascending by display text.
    Asc,
    /// Descending by display text.
    Desc,
}

/// Ordered, indexed sequence of items.
#[derive(Debug, Clone, Default)]
pub struct ItemCollection {
    items: Vec<Item>,
    sort: SortOrder,
}

impl ItemCollection {
    /// Create an empty collection with the given sort order.
    pub fn new(sort: SortOrder) -> Self {
        Self {
            items: Vec::new(),
            sort,
        }
    }

    /// Get the configured sort order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Replace the item set.
    ///
    /// Every entry is checked before anything is mutated: a single foreign
    /// entry rejects the whole call and leaves the previous items in place.
    /// Accepted items are sorted (when configured) and re-indexed.
    pub fn set_items<I>(&mut self, entries: I) -> Result<&[Item]>
    where
        I: IntoIterator,
        I::Item: Into<ItemNode>,
    {
        let nodes: Vec<ItemNode> = entries.into_iter().map(Into::into).collect();

        if let Some((index, kind)) = nodes.iter().enumerate().find_map(|(i, node)| match node {
            ItemNode::Foreign { kind } => Some((i, kind.clone())),
            ItemNode::Item(_) => None,
        }) {
            return Err(PicklistError::InvalidItemKind { index, kind });
        }

        let mut items: Vec<Item> = nodes
            .into_iter()
            .filter_map(|node| match node {
                ItemNode::Item(item) => Some(item),
                ItemNode::Foreign { .. } => None,
            })
            .collect();

        sort_items(&mut items, self.sort);
        for (index, item) in items.iter_mut().enumerate() {
            item.index = index;
        }

        self.items = items;
        Ok(&self.items)
    }

    /// All items in collection order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get an item by collection index.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Item> {
        self.items.iter_mut()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indices of selected items, in collection order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.index)
            .collect()
    }

    /// Selected items, in collection order.
    pub fn selected_items(&self) -> Vec<Item> {
        self.items.iter().filter(|item| item.selected).cloned().collect()
    }

    /// Collection index of the first item with the given id.
    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// Sort items in place according to `order`.
///
/// Descending calls the comparator with its operands swapped rather than
/// reversing the ascending result, so items that compare equal keep their
/// supplied relative order in both directions.
pub fn sort_items(items: &mut [Item], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::Asc => items.sort_by(|a, b| compare_labels(&a.label, &b.label)),
        SortOrder::Desc => items.sort_by(|a, b| compare_labels(&b.label, &a.label)),
    }
}

/// Locale-aware comparison of display text.
///
/// Leading whitespace is ignored, letters compare case- and
/// accent-insensitively, and runs of ASCII digits compare by numeric value
/// (`"item 2"` sorts before `"item 10"`).
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    let a = fold(a.trim_start());
    let b = fold(b.trim_start());

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let a_end = digit_run_end(&a, i);
            let b_end = digit_run_end(&b, j);
            let ordering = compare_numeric(&a[i..a_end], &b[j..b_end]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i = a_end;
            j = b_end;
            continue;
        }

        let ordering = a[i].cmp(&b[j]);
        if ordering != Ordering::Equal {
            return ordering;
        }
        i += 1;
        j += 1;
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Decompose, drop combining marks and lowercase.
fn fold(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn digit_run_end(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |offset| start + offset)
}

fn compare_numeric(a: &[char], b: &[char]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(digits: &[char]) -> &[char] {
    let first = digits.iter().position(|c| *c != '0').unwrap_or(digits.len());
    &digits[first..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(compare_labels("apple", "Apple"), Ordering::Equal);
        assert_eq!(compare_labels("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_numeric_runs() {
        assert_eq!(compare_labels("item 2", "item 10"), Ordering::Less);
        assert_eq!(compare_labels("item 010", "item 10"), Ordering::Equal);
        assert_eq!(compare_labels("v1.9", "v1.10"), Ordering::Less);
    }

    #[test]
    fn test_leading_whitespace_and_accents() {
        assert_eq!(compare_labels("  zebra", "zebra"), Ordering::Equal);
        assert_eq!(compare_labels("école", "ecole"), Ordering::Equal);
        assert_eq!(compare_labels("Émile", "Fabien"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_labels("app", "apple"), Ordering::Less);
        assert_eq!(compare_labels("apple", "app"), Ordering::Greater);
    }
}
