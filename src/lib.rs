//! Query-cached access to a REST "reviews" resource.
//!
//! - [`query`] turns filter mappings into canonical cache keys
//! - [`store`] holds the normalized state, its reducers and selectors
//! - [`dispatch`] issues HTTP calls and feeds their outcome to the store
//! - [`connector`] decides when a view needs a fetch

pub mod api;
pub mod cli;
pub mod config;
pub mod connector;
pub mod dispatch;
pub mod logging;
pub mod query;
pub mod review;
pub mod store;

pub use api::{ApiError, HttpReviewsApi, ReviewsApi};
pub use connector::{FetchDecision, FetchProps, QueryReviews};
pub use dispatch::Dispatcher;
pub use query::{QueryKey, ReviewQuery};
pub use review::{Review, ReviewId};
pub use store::{ReviewAction, ReviewStore, ReviewsState};
