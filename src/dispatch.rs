//! Request dispatcher.
//!
//! Bridges the "not yet requested" decision to network calls. Each
//! operation issues one or two API calls and dispatches a fixed sequence of
//! actions; it never touches state directly and never returns an error.

use std::sync::Arc;

use crate::api::{ApiError, ReviewsApi};
use crate::query::ReviewQuery;
use crate::store::{ReviewAction, ReviewStore};

pub struct Dispatcher<A> {
    api: A,
    store: ReviewStore,
}

impl<A: ReviewsApi> Dispatcher<A> {
    pub fn new(api: A, store: ReviewStore) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch one page of reviews for `query`.
    ///
    /// Dispatches `ReviewsRequest`, then either `ReviewsReceive` followed by
    /// `ReviewsRequestSuccess` (with the page count from a HEAD request), or
    /// `ReviewsRequestFailure`. Every action carries the caller's query, so
    /// the in-flight flag is cleared under the key it was set.
    pub async fn request_reviews(&self, query: ReviewQuery) {
        let key = query.canonical_key();
        tracing::debug!(query = %key, "Requesting reviews");

        self.store.dispatch(ReviewAction::ReviewsRequest {
            query: query.clone(),
        });

        let request = query.with_embed();
        let reviews = match self.api.list(&request).await {
            Ok(reviews) => reviews,
            Err(error) => return self.fail_reviews(query, error),
        };

        self.store.dispatch(ReviewAction::ReviewsReceive {
            reviews: reviews.clone(),
        });

        match self.api.total_pages(&request).await {
            Ok(total_pages) => {
                tracing::info!(
                    query = %key,
                    count = reviews.len(),
                    total_pages,
                    "Reviews received"
                );
                self.store.dispatch(ReviewAction::ReviewsRequestSuccess {
                    query,
                    total_pages,
                    reviews,
                });
            }
            Err(error) => self.fail_reviews(query, error),
        }
    }

    /// Fetch a single review by slug.
    ///
    /// Dispatches `ReviewRequest`, then `ReviewsReceive` and
    /// `ReviewRequestSuccess`, or `ReviewRequestFailure` if the call fails or
    /// finds nothing.
    pub async fn request_review(&self, slug: &str) {
        tracing::debug!(slug, "Requesting review");

        self.store.dispatch(ReviewAction::ReviewRequest {
            slug: slug.to_string(),
        });

        let query = ReviewQuery::new().with("slug", slug).with_embed();
        let review = match self.api.list(&query).await {
            Ok(reviews) => reviews.into_iter().next(),
            Err(error) => return self.fail_review(slug, error),
        };

        let Some(review) = review else {
            return self.fail_review(
                slug,
                ApiError::NotFound {
                    slug: slug.to_string(),
                },
            );
        };

        let review_id = review.id;
        self.store.dispatch(ReviewAction::ReviewsReceive {
            reviews: vec![review],
        });
        self.store.dispatch(ReviewAction::ReviewRequestSuccess {
            slug: slug.to_string(),
            review_id,
        });
        tracing::info!(slug, review_id, "Review received");
    }

    fn fail_reviews(&self, query: ReviewQuery, error: ApiError) {
        tracing::warn!(
            query = %query.canonical_key(),
            error_type = error.error_type(),
            error = %error,
            "Reviews request failed"
        );
        self.store.dispatch(ReviewAction::ReviewsRequestFailure {
            query,
            error: Arc::new(error),
        });
    }

    fn fail_review(&self, slug: &str, error: ApiError) {
        tracing::warn!(
            slug,
            error_type = error.error_type(),
            error = %error,
            "Review request failed"
        );
        self.store.dispatch(ReviewAction::ReviewRequestFailure {
            slug: slug.to_string(),
            error: Arc::new(error),
        });
    }
}
