//! Read-only projections over [`ReviewsState`].
//!
//! Absence is never an error here: unknown keys map to `None`, `false`, or
//! a single page.

use std::sync::Arc;

use super::state::{RequestKey, ReviewsState};
use crate::query::ReviewQuery;
use crate::review::{Review, ReviewId};

pub fn get_review(state: &ReviewsState, id: ReviewId) -> Option<Arc<Review>> {
    state.items.get(&id).cloned()
}

/// Reviews cached for `query`, in response order.
///
/// Returns `None` if the query has never completed, which is different from
/// `Some(vec![])` (completed with no results). Ids that no longer resolve to
/// a stored review are skipped.
pub fn get_reviews_for_query(state: &ReviewsState, query: &ReviewQuery) -> Option<Vec<Arc<Review>>> {
    let ids = state.queries.get(&query.canonical_key())?;
    Some(ids.iter().filter_map(|id| get_review(state, *id)).collect())
}

pub fn is_requesting_reviews_for_query(state: &ReviewsState, query: &ReviewQuery) -> bool {
    state
        .query_requests
        .get(&query.canonical_key())
        .copied()
        .unwrap_or(false)
}

/// Page count for `query`; an uncached query is assumed to have one page.
pub fn get_total_pages_for_query(state: &ReviewsState, query: &ReviewQuery) -> u32 {
    match state.total_pages.get(&query.canonical_key()) {
        Some(&pages) if pages > 0 => pages,
        _ => 1,
    }
}

pub fn is_requesting_review(state: &ReviewsState, slug: &str) -> bool {
    state.requests.get(slug).copied().unwrap_or(false)
}

pub fn get_review_id_from_slug(state: &ReviewsState, slug: &str) -> Option<ReviewId> {
    state.slugs.get(slug).copied()
}

pub fn get_review_by_slug(state: &ReviewsState, slug: &str) -> Option<Arc<Review>> {
    get_review_id_from_slug(state, slug).and_then(|id| get_review(state, id))
}

/// Message of the last failed list request for `query`, if it has not been
/// retried since.
pub fn get_error_for_query<'a>(state: &'a ReviewsState, query: &ReviewQuery) -> Option<&'a str> {
    state
        .errors
        .get(&RequestKey::Query(query.canonical_key()))
        .map(String::as_str)
}

pub fn get_error_for_review<'a>(state: &'a ReviewsState, slug: &str) -> Option<&'a str> {
    state
        .errors
        .get(&RequestKey::Slug(slug.to_string()))
        .map(String::as_str)
}
