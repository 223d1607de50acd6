//! Actions folded into the review state tree.

use std::sync::Arc;

use crate::api::ApiError;
use crate::query::ReviewQuery;
use crate::review::{Review, ReviewId};

/// Marker trait for action objects.
///
/// Actions describe something that happened (a request started, a response
/// arrived). Reducers fold them into state; they carry no behavior.
pub trait Action: Send + 'static {}

pub const REVIEW_REQUEST: &str = "wordpress-redux/review/REQUEST";
pub const REVIEW_REQUEST_SUCCESS: &str = "wordpress-redux/review/REQUEST_SUCCESS";
pub const REVIEW_REQUEST_FAILURE: &str = "wordpress-redux/review/REQUEST_FAILURE";
pub const REVIEWS_RECEIVE: &str = "wordpress-redux/reviews/RECEIVE";
pub const REVIEWS_REQUEST: &str = "wordpress-redux/reviews/REQUEST";
pub const REVIEWS_REQUEST_SUCCESS: &str = "wordpress-redux/reviews/REQUEST_SUCCESS";
pub const REVIEWS_REQUEST_FAILURE: &str = "wordpress-redux/reviews/REQUEST_FAILURE";

#[derive(Debug, Clone)]
pub enum ReviewAction {
    /// Single-review fetch started.
    ReviewRequest { slug: String },
    /// Single-review fetch finished; the review itself arrives via `ReviewsReceive`.
    ReviewRequestSuccess { slug: String, review_id: ReviewId },
    ReviewRequestFailure { slug: String, error: Arc<ApiError> },
    /// A batch of reviews arrived from any fetch.
    ReviewsReceive { reviews: Vec<Review> },
    /// List fetch started.
    ReviewsRequest { query: ReviewQuery },
    ReviewsRequestSuccess {
        query: ReviewQuery,
        total_pages: u32,
        reviews: Vec<Review>,
    },
    ReviewsRequestFailure {
        query: ReviewQuery,
        error: Arc<ApiError>,
    },
}

impl Action for ReviewAction {}

impl ReviewAction {
    /// Namespaced tag for this action.
    pub fn action_type(&self) -> &'static str {
        match self {
            ReviewAction::ReviewRequest { .. } => REVIEW_REQUEST,
            ReviewAction::ReviewRequestSuccess { .. } => REVIEW_REQUEST_SUCCESS,
            ReviewAction::ReviewRequestFailure { .. } => REVIEW_REQUEST_FAILURE,
            ReviewAction::ReviewsReceive { .. } => REVIEWS_RECEIVE,
            ReviewAction::ReviewsRequest { .. } => REVIEWS_REQUEST,
            ReviewAction::ReviewsRequestSuccess { .. } => REVIEWS_REQUEST_SUCCESS,
            ReviewAction::ReviewsRequestFailure { .. } => REVIEWS_REQUEST_FAILURE,
        }
    }
}
