//! Shared test helpers.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use picklist::filter::{RankError, RankOptions, Ranked, Ranker};
use picklist::item::Item;
use picklist::navigation::ViewPort;
use simplelog::{Config, LevelFilter, TestLogger};

/// Route log output through the test harness.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Items whose id and label are the same text.
pub fn items(labels: &[&str]) -> Vec<Item> {
    labels.iter().map(|label| Item::new(*label)).collect()
}

/// Ranker returning canned results per query.
#[derive(Debug, Default, Clone)]
pub struct StubRanker {
    responses: HashMap<String, Vec<String>>,
}

impl StubRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, query: &str, results: &[&str]) -> Self {
        self.responses.insert(
            query.to_string(),
            results.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

impl Ranker for StubRanker {
    fn rank(
        &self,
        query: &str,
        _candidates: &[&str],
        options: &RankOptions,
    ) -> Result<Vec<Ranked>, RankError> {
        Ok(self
            .responses
            .get(query)
            .map(|texts| {
                texts
                    .iter()
                    .take(options.limit)
                    .map(|text| Ranked::new(text.clone(), 0))
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Ranker that always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRanker;

impl Ranker for FailingRanker {
    fn rank(
        &self,
        _query: &str,
        _candidates: &[&str],
        _options: &RankOptions,
    ) -> Result<Vec<Ranked>, RankError> {
        Err("matcher exploded".into())
    }
}

/// Substring ranker that fails once `poison` is among the candidates.
#[derive(Debug, Clone, Copy)]
pub struct PoisonedRanker {
    pub poison: &'static str,
}

impl Ranker for PoisonedRanker {
    fn rank(
        &self,
        query: &str,
        candidates: &[&str],
        options: &RankOptions,
    ) -> Result<Vec<Ranked>, RankError> {
        if candidates.contains(&self.poison) {
            return Err(format!("cannot rank {:?}", self.poison).into());
        }
        Ok(candidates
            .iter()
            .filter(|text| text.contains(query))
            .take(options.limit)
            .map(|text| Ranked::new(*text, 0))
            .collect())
    }
}

/// A call made on a [`RecordingViewPort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCall {
    Highlight(Option<usize>),
    Scroll(usize),
}

/// View port that records every call; clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingViewPort {
    calls: Rc<RefCell<Vec<ViewCall>>>,
}

impl RecordingViewPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl ViewPort for RecordingViewPort {
    fn highlight_row(&mut self, index: Option<usize>) {
        self.calls.borrow_mut().push(ViewCall::Highlight(index));
    }

    fn scroll_row_into_view(&mut self, index: usize) {
        self.calls.borrow_mut().push(ViewCall::Scroll(index));
    }
}
