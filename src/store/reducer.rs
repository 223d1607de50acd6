//! Reducers for the review state tree.
//!
//! One function per map in [`ReviewsState`]. Each is total over
//! [`ReviewAction`] and returns its input unchanged for actions it does not
//! handle. State is taken by value and returned, so a snapshot held by
//! someone else is never touched.

use std::collections::HashMap;
use std::sync::Arc;

use super::action::{Action, ReviewAction};
use super::state::{RequestKey, ReviewsState, StoreState};
use crate::query::QueryKey;
use crate::review::{Review, ReviewId};

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

/// Combines the per-map reducers into one over [`ReviewsState`].
pub struct ReviewsReducer;

impl Reducer for ReviewsReducer {
    type State = ReviewsState;
    type Action = ReviewAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let ReviewsState {
            items: items_map,
            requests: requests_map,
            query_requests: query_requests_map,
            total_pages: total_pages_map,
            queries: queries_map,
            slugs: slugs_map,
            errors: errors_map,
        } = state;

        ReviewsState {
            items: items(items_map, &action),
            requests: requests(requests_map, &action),
            query_requests: query_requests(query_requests_map, &action),
            total_pages: total_pages(total_pages_map, &action),
            queries: queries(queries_map, &action),
            slugs: slugs(slugs_map, &action),
            errors: errors(errors_map, &action),
        }
    }
}

/// Tracks all known reviews by id. A later copy of a review fully replaces
/// the earlier one.
pub fn items(
    mut state: HashMap<ReviewId, Arc<Review>>,
    action: &ReviewAction,
) -> HashMap<ReviewId, Arc<Review>> {
    match action {
        ReviewAction::ReviewsReceive { reviews } => {
            for review in reviews {
                state.insert(review.id, Arc::new(review.clone()));
            }
            state
        }
        _ => state,
    }
}

/// Slug -> whether a single-review request is in progress.
pub fn requests(mut state: HashMap<String, bool>, action: &ReviewAction) -> HashMap<String, bool> {
    match action {
        ReviewAction::ReviewRequest { slug } => {
            state.insert(slug.clone(), true);
            state
        }
        ReviewAction::ReviewRequestSuccess { slug, .. }
        | ReviewAction::ReviewRequestFailure { slug, .. } => {
            state.insert(slug.clone(), false);
            state
        }
        _ => state,
    }
}

/// Canonical query -> whether a list request is in progress.
pub fn query_requests(
    mut state: HashMap<QueryKey, bool>,
    action: &ReviewAction,
) -> HashMap<QueryKey, bool> {
    match action {
        ReviewAction::ReviewsRequest { query } => {
            state.insert(query.canonical_key(), true);
            state
        }
        ReviewAction::ReviewsRequestSuccess { query, .. }
        | ReviewAction::ReviewsRequestFailure { query, .. } => {
            state.insert(query.canonical_key(), false);
            state
        }
        _ => state,
    }
}

/// Canonical query -> page count of the last successful response.
pub fn total_pages(
    mut state: HashMap<QueryKey, u32>,
    action: &ReviewAction,
) -> HashMap<QueryKey, u32> {
    match action {
        ReviewAction::ReviewsRequestSuccess {
            query, total_pages, ..
        } => {
            state.insert(query.canonical_key(), *total_pages);
            state
        }
        _ => state,
    }
}

/// Canonical query -> review ids of the last successful response.
pub fn queries(
    mut state: HashMap<QueryKey, Vec<ReviewId>>,
    action: &ReviewAction,
) -> HashMap<QueryKey, Vec<ReviewId>> {
    match action {
        ReviewAction::ReviewsRequestSuccess { query, reviews, .. } => {
            let ids = reviews.iter().map(|review| review.id).collect();
            state.insert(query.canonical_key(), ids);
            state
        }
        _ => state,
    }
}

/// Slug -> review id.
pub fn slugs(
    mut state: HashMap<String, ReviewId>,
    action: &ReviewAction,
) -> HashMap<String, ReviewId> {
    match action {
        ReviewAction::ReviewRequestSuccess { slug, review_id } => {
            state.insert(slug.clone(), *review_id);
            state
        }
        ReviewAction::ReviewsReceive { reviews } => {
            for review in reviews {
                if let Some(slug) = &review.slug {
                    state.insert(slug.clone(), review.id);
                }
            }
            state
        }
        _ => state,
    }
}

/// Last failure message per request key.
pub fn errors(
    mut state: HashMap<RequestKey, String>,
    action: &ReviewAction,
) -> HashMap<RequestKey, String> {
    match action {
        ReviewAction::ReviewRequest { slug } | ReviewAction::ReviewRequestSuccess { slug, .. } => {
            state.remove(&RequestKey::Slug(slug.clone()));
            state
        }
        ReviewAction::ReviewRequestFailure { slug, error } => {
            state.insert(RequestKey::Slug(slug.clone()), error.to_string());
            state
        }
        ReviewAction::ReviewsRequest { query }
        | ReviewAction::ReviewsRequestSuccess { query, .. } => {
            state.remove(&RequestKey::Query(query.canonical_key()));
            state
        }
        ReviewAction::ReviewsRequestFailure { query, error } => {
            state.insert(RequestKey::Query(query.canonical_key()), error.to_string());
            state
        }
        ReviewAction::ReviewsReceive { .. } => state,
    }
}
