//! Query filtering against the item collection.
//!
//! Ranking is delegated to a [`Ranker`]: given a query and candidate texts it
//! returns the ranked subset it considers matches. [`NucleoRanker`] is the
//! default implementation; tests and hosts with their own matcher plug in
//! anything else, including plain closures.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::error::{PicklistError, Result};
use crate::item::Item;

/// Error type returned by rankers.
pub type RankError = Box<dyn std::error::Error + Send + Sync>;

/// Options handed to the ranker on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Maximum number of results.
    pub limit: usize,
    /// Whether the matcher may tolerate typos.
    pub allow_typo: bool,
    /// Results scoring below this are dropped.
    pub threshold: i64,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: 50,
            allow_typo: false,
            threshold: -10_000,
        }
    }
}

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked {
    /// The candidate text as it was passed in.
    pub text: String,
    /// Match score (higher is better).
    pub score: i64,
}

impl Ranked {
    /// Create a ranked result.
    pub fn new(text: impl Into<String>, score: i64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// External fuzzy-ranking collaborator.
///
/// Implementations must be total for valid string input. Errors are not
/// caught by the picklist; they surface as [`PicklistError::Ranking`].
pub trait Ranker {
    /// Rank `candidates` against `query`, best match first.
    fn rank(
        &self,
        query: &str,
        candidates: &[&str],
        options: &RankOptions,
    ) -> std::result::Result<Vec<Ranked>, RankError>;
}

impl<F> Ranker for F
where
    F: Fn(&str, &[&str], &RankOptions) -> std::result::Result<Vec<Ranked>, RankError>,
{
    fn rank(
        &self,
        query: &str,
        candidates: &[&str],
        options: &RankOptions,
    ) -> std::result::Result<Vec<Ranked>, RankError> {
        self(query, candidates, options)
    }
}

/// Default ranker using nucleo-matcher.
///
/// Matching is fuzzy and case-insensitive. Nucleo never tolerates typos, so
/// `allow_typo` has no effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NucleoRanker;

impl Ranker for NucleoRanker {
    fn rank(
        &self,
        query: &str,
        candidates: &[&str],
        options: &RankOptions,
    ) -> std::result::Result<Vec<Ranked>, RankError> {
        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut buf = Vec::new();
        let mut ranked: Vec<Ranked> = candidates
            .iter()
            .filter_map(|text| {
                let haystack = Utf32Str::new(text, &mut buf);
                pattern
                    .score(haystack, &mut matcher)
                    .map(|score| Ranked::new(*text, i64::from(score)))
            })
            .filter(|ranked| ranked.score >= options.threshold)
            .collect();

        // Stable, so equal scores keep candidate order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(options.limit);
        Ok(ranked)
    }
}

/// How the highlight should react to a filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightReset {
    /// Leave the highlight where it is.
    Keep,
    /// Move it back to the last committed selection.
    ToCommitted,
    /// Move it to the first row.
    ToFirst,
}

/// Result of a filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Collection indices of the current items, in display order.
    pub items: Vec<usize>,
    /// What to do with the highlight.
    pub reset: HighlightReset,
}

/// Turns a query into the current item list.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    options: RankOptions,
    previous_count: usize,
}

impl FilterEngine {
    /// Create an engine passing `options` to the ranker.
    pub fn new(options: RankOptions) -> Self {
        Self {
            options,
            previous_count: 0,
        }
    }

    /// Options passed to the ranker.
    pub fn options(&self) -> &RankOptions {
        &self.options
    }

    /// Forget the previous pass; the next comparison is against `count`.
    pub fn reset(&mut self, count: usize) {
        self.previous_count = count;
    }

    /// Run a filter pass and decide what the highlight should do.
    ///
    /// An empty query yields every item in collection order and restores the
    /// committed highlight. Otherwise the highlight goes back to the first row
    /// whenever the number of results differs from the previous pass.
    pub fn filter(&mut self, query: &str, items: &[Item], ranker: &dyn Ranker) -> Result<FilterOutcome> {
        let current = filter_items(query, items, ranker, &self.options)?;

        let reset = if query.is_empty() {
            HighlightReset::ToCommitted
        } else if current.len() != self.previous_count {
            HighlightReset::ToFirst
        } else {
            HighlightReset::Keep
        };

        log::debug!(
            "[filter] query={:?} results={} previous={} reset={:?}",
            query,
            current.len(),
            self.previous_count,
            reset
        );

        self.previous_count = current.len();
        Ok(FilterOutcome {
            items: current,
            reset,
        })
    }
}

/// Compute the current items for `query` without touching any state.
///
/// Ranked texts are mapped back to items by exact text match; when several
/// items share a text the first one in collection order wins. Ranked texts
/// with no matching item are dropped.
pub fn filter_items(
    query: &str,
    items: &[Item],
    ranker: &dyn Ranker,
    options: &RankOptions,
) -> Result<Vec<usize>> {
    if query.is_empty() {
        return Ok(items.iter().map(|item| item.index).collect());
    }

    let candidates: Vec<&str> = items.iter().map(Item::filter_text).collect();
    let ranked = ranker
        .rank(query, &candidates, options)
        .map_err(PicklistError::Ranking)?;

    Ok(ranked
        .iter()
        .filter_map(|ranked| {
            items
                .iter()
                .find(|item| item.filter_text() == ranked.text)
                .map(|item| item.index)
        })
        .collect())
}
