//! Error types

use crate::filter::RankError;

/// Errors surfaced by the picklist core.
#[derive(Debug, thiserror::Error)]
pub enum PicklistError {
    /// An entry handed to `set_items` is not a picklist option.
    ///
    /// Raised before the collection is touched, so the previous item set
    /// stays in place.
    #[error("Entry {index} is not a picklist item (found '{kind}')")]
    InvalidItemKind {
        /// Position of the offending entry in the supplied sequence.
        index: usize,
        /// Kind reported by the foreign entry.
        kind: String,
    },

    /// The single-select flavor was configured for multi-select.
    #[error("Multi-select is not supported by the single-select flavor")]
    MultiSelectUnsupported,

    /// The ranking collaborator failed.
    #[error("Ranking failed: {0}")]
    Ranking(#[source] RankError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PicklistError>;
