//! Review record as returned by the REST API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Global review identity.
pub type ReviewId = u64;

/// A review. Only `id` and `slug` are interpreted; every other field is
/// kept as-is and round-trips through the store untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Review {
    pub fn new(id: ReviewId, slug: impl Into<String>) -> Self {
        Self {
            id,
            slug: Some(slug.into()),
            fields: Map::new(),
        }
    }

    /// Attach an opaque field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}
