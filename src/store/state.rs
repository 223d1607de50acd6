//! The review state tree.

use std::collections::HashMap;
use std::sync::Arc;

use crate::query::QueryKey;
use crate::review::{Review, ReviewId};

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Empty by default
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}

/// Key of an entry in the error cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestKey {
    Slug(String),
    Query(QueryKey),
}

/// Flat, normalized review state. Every map is independent and owned by
/// exactly one reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewsState {
    /// Known reviews by id.
    pub items: HashMap<ReviewId, Arc<Review>>,
    /// Whether a single-review fetch is in flight, by slug.
    pub requests: HashMap<String, bool>,
    /// Whether a list fetch is in flight, by canonical query.
    pub query_requests: HashMap<QueryKey, bool>,
    /// Page count from the last successful fetch of each query.
    pub total_pages: HashMap<QueryKey, u32>,
    /// Review ids, in response order, from the last successful fetch.
    pub queries: HashMap<QueryKey, Vec<ReviewId>>,
    pub slugs: HashMap<String, ReviewId>,
    /// Message of the last failed request per key; cleared on retry.
    pub errors: HashMap<RequestKey, String>,
}

impl StoreState for ReviewsState {}
