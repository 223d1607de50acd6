//! Shared test utilities: fixtures, a scripted API double, action recording.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use reviewkit::store::ReviewAction;
use reviewkit::{ApiError, Review, ReviewQuery, ReviewStore, ReviewsApi};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Arc;

// -- Fixtures -----------------------------------------------------------------

fn fixture(id: u64, slug: &str, title: &str) -> Review {
    Review::new(id, slug)
        .with_field("title", json!({ "rendered": title }))
        .with_field("status", "publish")
}

/// Four reviews with ids 2, 5, 6, 8.
pub fn reviews() -> Vec<Review> {
    vec![
        fixture(2, "test-review", "Test review"),
        fixture(5, "another-review", "Another review"),
        fixture(6, "another-review-another-review", "Another review, again"),
        fixture(8, "review-another-review", "Review, another review"),
    ]
}

/// A single review with id 9.
pub fn review() -> Review {
    fixture(9, "test-oooo-review", "Test oooo review")
}

pub fn reviews_json() -> String {
    serde_json::to_string(&reviews()).unwrap()
}

// -- API double ---------------------------------------------------------------

/// Scripted [`ReviewsApi`]: pops queued results, records the queries it saw.
///
/// With no queued result, `list` answers `[]` and `total_pages` answers 1.
#[derive(Default)]
pub struct FakeApi {
    lists: Mutex<VecDeque<Result<Vec<Review>, ApiError>>>,
    pages: Mutex<VecDeque<Result<u32, ApiError>>>,
    pub list_calls: Mutex<Vec<ReviewQuery>>,
    pub page_calls: Mutex<Vec<ReviewQuery>>,
    /// Held by a test to keep `list` calls suspended.
    pub hold: tokio::sync::Mutex<()>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: Result<Vec<Review>, ApiError>) {
        self.lists.lock().push_back(result);
    }

    pub fn push_pages(&self, result: Result<u32, ApiError>) {
        self.pages.lock().push_back(result);
    }
}

#[async_trait]
impl ReviewsApi for FakeApi {
    async fn list(&self, query: &ReviewQuery) -> Result<Vec<Review>, ApiError> {
        self.list_calls.lock().push(query.clone());
        let _hold = self.hold.lock().await;
        self.lists.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn total_pages(&self, query: &ReviewQuery) -> Result<u32, ApiError> {
        self.page_calls.lock().push(query.clone());
        self.pages.lock().pop_front().unwrap_or(Ok(1))
    }
}

// -- Action recording ---------------------------------------------------------

pub type ActionLog = Arc<Mutex<Vec<ReviewAction>>>;

/// Record every action dispatched to `store`.
pub fn record_actions(store: &ReviewStore) -> ActionLog {
    let log: ActionLog = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    store.subscribe(move |action| sink.lock().push(action.clone()));
    log
}

pub fn action_types(log: &ActionLog) -> Vec<&'static str> {
    log.lock().iter().map(ReviewAction::action_type).collect()
}
