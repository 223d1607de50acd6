//! Review query normalization.
//!
//! Queries are plain key/value mappings. They are never used as cache keys
//! directly: every lookup goes through [`ReviewQuery::canonical_key`], which
//! strips values equal to the server defaults and serializes the rest in a
//! key-order-insensitive way.

mod encode;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Canonical serialized form of a query, used as a key in the state tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QueryKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Parameters the list endpoint applies when a key is omitted.
fn default_query() -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("_embed", json!(true)),
        ("number", json!(10)),
        ("offset", json!(0)),
        ("order_by", json!("meta_value")),
        ("type", json!("reviews")),
        ("order", json!("ASC")),
        ("fields", json!("all_with_meta")),
    ])
}

/// Filter parameters for a review list request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewQuery(BTreeMap<String, Value>);

impl ReviewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set the `paged` parameter.
    pub fn page(self, page: u32) -> Self {
        self.with("paged", page)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Copy of this query with `_embed` forced on.
    pub fn with_embed(&self) -> Self {
        self.clone().with("_embed", true)
    }

    /// Drop every parameter whose value equals the default for that key.
    pub fn normalized(&self) -> Self {
        let defaults = default_query();
        let kept = self
            .0
            .iter()
            .filter(|(key, value)| defaults.get(key.as_str()) != Some(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self(kept)
    }

    /// Stable cache key: compact JSON of the normalized query, lowercased.
    ///
    /// Keys are emitted in sorted order, so insertion order never matters.
    pub fn canonical_key(&self) -> QueryKey {
        // A map of JSON values always serializes.
        let json = serde_json::to_string(&self.normalized().0).unwrap_or_else(|_| "{}".into());
        QueryKey(json.to_lowercase())
    }

    /// Flatten into query-string pairs (`key[0]=a`, `key[sub]=b`).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.0 {
            encode::flatten(key, value, &mut pairs);
        }
        pairs
    }
}

/// Canonical key for an optional query; `None` is the empty query.
pub fn canonical_key(query: Option<&ReviewQuery>) -> QueryKey {
    match query {
        Some(query) => query.canonical_key(),
        None => ReviewQuery::default().canonical_key(),
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ReviewQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Error parsing a `key=value` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid query parameter '{0}': expected key=value")]
pub struct ParseParamError(String);

impl FromStr for ReviewQuery {
    type Err = ParseParamError;

    /// Parse `key=value&key2=value2`. Values that look like JSON scalars
    /// (numbers, booleans) keep that type; everything else is a string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut query = ReviewQuery::new();
        for part in s.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = part
                .split_once('=')
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| ParseParamError(part.to_string()))?;
            query = query.with(key, parse_scalar(raw));
        }
        Ok(query)
    }
}

fn parse_scalar(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(v @ (Value::Number(_) | Value::Bool(_))) => v,
        _ => Value::String(raw.to_string()),
    }
}
