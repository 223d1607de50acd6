//! Render-less connector between a view and the dispatcher.
//!
//! The decision of whether to fetch is a pure function of the previous and
//! next props plus the current in-flight flags ([`should_fetch`]), so it can
//! be tested without any UI. [`QueryReviews`] is the thin stateful binding
//! that remembers the last props and runs the chosen fetch.

use std::sync::Arc;

use crate::api::ReviewsApi;
use crate::dispatch::Dispatcher;
use crate::query::ReviewQuery;
use crate::store::{selectors, ReviewsState};

/// What the view wants loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchProps {
    pub review_slug: Option<String>,
    pub query: Option<ReviewQuery>,
}

impl FetchProps {
    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            review_slug: Some(slug.into()),
            query: None,
        }
    }

    pub fn query(query: ReviewQuery) -> Self {
        Self {
            review_slug: None,
            query: Some(query),
        }
    }

    fn effective_query(&self) -> ReviewQuery {
        self.query.clone().unwrap_or_default()
    }
}

/// In-flight flags relevant to a set of props.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestFlags {
    pub requesting_review: bool,
    pub requesting_reviews: bool,
}

impl RequestFlags {
    pub fn from_state(state: &ReviewsState, props: &FetchProps) -> Self {
        let requesting_review = props
            .review_slug
            .as_deref()
            .is_some_and(|slug| selectors::is_requesting_review(state, slug));
        Self {
            requesting_review,
            requesting_reviews: selectors::is_requesting_reviews_for_query(
                state,
                &props.effective_query(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchDecision {
    Nothing,
    Reviews(ReviewQuery),
    Review(String),
}

/// Whether the slug changed or the query changed by value.
pub fn props_changed(prev: &FetchProps, next: &FetchProps) -> bool {
    prev.review_slug != next.review_slug || prev.query != next.query
}

/// Decide what to fetch for `next`.
///
/// On mount (`prev` is `None`) or when the props changed, a present slug
/// selects the single-review fetch, otherwise the list fetch; either is
/// skipped while the same request is already in flight.
pub fn should_fetch(
    prev: Option<&FetchProps>,
    next: &FetchProps,
    flags: RequestFlags,
) -> FetchDecision {
    if prev.is_some_and(|prev| !props_changed(prev, next)) {
        return FetchDecision::Nothing;
    }

    match next.review_slug.as_deref().filter(|slug| !slug.is_empty()) {
        Some(slug) if !flags.requesting_review => FetchDecision::Review(slug.to_string()),
        Some(_) => FetchDecision::Nothing,
        None if !flags.requesting_reviews => FetchDecision::Reviews(next.effective_query()),
        None => FetchDecision::Nothing,
    }
}

/// Stateful binding: feed it props whenever they may have changed.
pub struct QueryReviews<A> {
    dispatcher: Arc<Dispatcher<A>>,
    props: Option<FetchProps>,
}

impl<A: ReviewsApi> QueryReviews<A> {
    pub fn new(dispatcher: Arc<Dispatcher<A>>) -> Self {
        Self {
            dispatcher,
            props: None,
        }
    }

    /// Props seen by the last call to [`QueryReviews::update`].
    pub fn props(&self) -> Option<&FetchProps> {
        self.props.as_ref()
    }

    /// Record `next` and compute the fetch it calls for.
    pub fn plan(&mut self, next: FetchProps) -> FetchDecision {
        let flags = self
            .dispatcher
            .store()
            .read(|state| RequestFlags::from_state(state, &next));
        let decision = should_fetch(self.props.as_ref(), &next, flags);
        self.props = Some(next);
        decision
    }

    /// Record `next` and run whatever fetch it calls for.
    pub async fn update(&mut self, next: FetchProps) -> FetchDecision {
        let decision = self.plan(next);
        match &decision {
            FetchDecision::Reviews(query) => {
                tracing::debug!(query = %query.canonical_key(), "Request review list");
                self.dispatcher.request_reviews(query.clone()).await;
            }
            FetchDecision::Review(slug) => {
                tracing::debug!(slug = %slug, "Request single review");
                self.dispatcher.request_review(slug).await;
            }
            FetchDecision::Nothing => {}
        }
        decision
    }
}
