mod common;

use std::collections::HashMap;
use std::sync::Arc;

use reviewkit::store::selectors;
use reviewkit::store::{RequestKey, ReviewsState};
use reviewkit::{QueryKey, ReviewQuery};

fn key(s: &str) -> QueryKey {
    QueryKey::from(s)
}

fn paged(n: u32) -> ReviewQuery {
    ReviewQuery::new().page(n)
}

fn state() -> ReviewsState {
    ReviewsState {
        items: common::reviews()
            .into_iter()
            .map(|r| (r.id, Arc::new(r)))
            .collect(),
        requests: HashMap::from([
            ("test-review".to_string(), false),
            ("pending-review".to_string(), true),
        ]),
        total_pages: HashMap::from([(key(r#"{"paged":1}"#), 3), (key(r#"{"paged":2}"#), 3)]),
        query_requests: HashMap::from([
            (key(r#"{"paged":1}"#), false),
            (key(r#"{"paged":2}"#), false),
            (key(r#"{"paged":3}"#), true),
        ]),
        queries: HashMap::from([
            (key(r#"{"paged":1}"#), vec![2, 5]),
            (key(r#"{"paged":2}"#), vec![6, 8]),
            (key(r#"{"paged":5}"#), vec![6, 404]),
        ]),
        slugs: HashMap::from([
            ("test-review".to_string(), 2),
            ("another-review".to_string(), 5),
            ("another-review-another-review".to_string(), 6),
            ("review-another-review".to_string(), 8),
        ]),
        errors: HashMap::from([
            (RequestKey::Query(key(r#"{"paged":9}"#)), "Server error: 500 - boom".to_string()),
            (RequestKey::Slug("broken".to_string()), "Review 'broken' not found".to_string()),
        ]),
    }
}

// -- is_requesting_review -----------------------------------------------------

#[test]
fn is_requesting_review_false_when_never_requested() {
    assert!(!selectors::is_requesting_review(&state(), "unrequested-review"));
}

#[test]
fn is_requesting_review_false_when_fetched() {
    assert!(!selectors::is_requesting_review(&state(), "test-review"));
}

#[test]
fn is_requesting_review_true_while_fetching() {
    assert!(selectors::is_requesting_review(&state(), "pending-review"));
}

#[test]
fn is_requesting_review_false_on_empty_state() {
    assert!(!selectors::is_requesting_review(&ReviewsState::default(), "pending-review"));
}

// -- get_review_id_from_slug --------------------------------------------------

#[test]
fn review_id_unknown_slug() {
    assert_eq!(selectors::get_review_id_from_slug(&state(), "unrequested-review"), None);
}

#[test]
fn review_id_known_slug() {
    assert_eq!(selectors::get_review_id_from_slug(&state(), "test-review"), Some(2));
}

// -- get_review ---------------------------------------------------------------

#[test]
fn get_review_unknown_id() {
    assert!(selectors::get_review(&state(), 10).is_none());
}

#[test]
fn get_review_known_id() {
    let review = selectors::get_review(&state(), 2).unwrap();
    assert_eq!(review.as_ref(), &common::reviews()[0]);
}

#[test]
fn get_review_by_slug_resolves_through_index() {
    let review = selectors::get_review_by_slug(&state(), "another-review").unwrap();
    assert_eq!(review.id, 5);
    assert!(selectors::get_review_by_slug(&state(), "nope").is_none());
}

// -- is_requesting_reviews_for_query ------------------------------------------

#[test]
fn is_requesting_query_false_when_never_requested() {
    assert!(!selectors::is_requesting_reviews_for_query(&state(), &paged(4)));
}

#[test]
fn is_requesting_query_false_when_fetched() {
    assert!(!selectors::is_requesting_reviews_for_query(&state(), &paged(1)));
}

#[test]
fn is_requesting_query_true_while_fetching() {
    assert!(selectors::is_requesting_reviews_for_query(&state(), &paged(3)));
}

#[test]
fn is_requesting_query_false_on_empty_state() {
    assert!(!selectors::is_requesting_reviews_for_query(
        &ReviewsState::default(),
        &paged(3)
    ));
}

#[test]
fn is_requesting_query_ignores_default_params() {
    let query = paged(3).with("number", 10).with("type", "reviews");
    assert!(selectors::is_requesting_reviews_for_query(&state(), &query));
}

// -- get_reviews_for_query ----------------------------------------------------

#[test]
fn reviews_for_query_none_when_never_fetched() {
    assert!(selectors::get_reviews_for_query(&state(), &paged(4)).is_none());
}

#[test]
fn reviews_for_query_lists_reviews_in_order() {
    let reviews = selectors::get_reviews_for_query(&state(), &paged(1)).unwrap();
    let ids: Vec<u64> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 5]);
    assert_eq!(reviews[0].as_ref(), &common::reviews()[0]);
}

#[test]
fn reviews_for_query_drops_unresolved_ids() {
    let reviews = selectors::get_reviews_for_query(&state(), &paged(5)).unwrap();
    let ids: Vec<u64> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![6]);
}

#[test]
fn reviews_for_query_empty_result_is_not_none() {
    let mut state = state();
    state.queries.insert(key(r#"{"paged":7}"#), vec![]);
    assert_eq!(
        selectors::get_reviews_for_query(&state, &paged(7)).map(|r| r.len()),
        Some(0)
    );
}

// -- get_total_pages_for_query ------------------------------------------------

#[test]
fn total_pages_defaults_to_one() {
    assert_eq!(selectors::get_total_pages_for_query(&state(), &paged(4)), 1);
}

#[test]
fn total_pages_for_fetched_query() {
    assert_eq!(selectors::get_total_pages_for_query(&state(), &paged(1)), 3);
}

#[test]
fn total_pages_zero_reads_as_one() {
    let mut state = state();
    state.total_pages.insert(key(r#"{"paged":6}"#), 0);
    assert_eq!(selectors::get_total_pages_for_query(&state, &paged(6)), 1);
}

// -- errors -------------------------------------------------------------------

#[test]
fn error_for_query() {
    assert_eq!(
        selectors::get_error_for_query(&state(), &paged(9)),
        Some("Server error: 500 - boom")
    );
    assert_eq!(selectors::get_error_for_query(&state(), &paged(1)), None);
}

#[test]
fn error_for_review() {
    assert_eq!(
        selectors::get_error_for_review(&state(), "broken"),
        Some("Review 'broken' not found")
    );
    assert_eq!(selectors::get_error_for_review(&state(), "test-review"), None);
}
