//! REST collaborator for the reviews resource.
//!
//! The dispatcher only sees the [`ReviewsApi`] trait; [`HttpReviewsApi`] is
//! the production implementation and tests substitute their own.

mod client;
mod error;

use async_trait::async_trait;

pub use client::{parse_total_pages, HttpReviewsApi, TOTAL_PAGES_HEADER};
pub use error::ApiError;

use crate::query::ReviewQuery;
use crate::review::Review;

/// Remote operations the dispatcher needs.
#[async_trait]
pub trait ReviewsApi: Send + Sync {
    /// Fetch one page of reviews matching `query`.
    async fn list(&self, query: &ReviewQuery) -> Result<Vec<Review>, ApiError>;

    /// Number of pages available for `query`. Implementations return 1 when
    /// the server does not say.
    async fn total_pages(&self, query: &ReviewQuery) -> Result<u32, ApiError>;
}
