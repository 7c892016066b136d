// WaniKani API response types.
// Defines structs for deserializing WaniKani v2 REST API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of a paginated collection response.
///
/// Cached pages re-serialize from these structs, so every field modeled here
/// round-trips unchanged; response fields the structs don't carry are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub object: String,
    pub url: String,
    pub pages: Pages,
    pub total_count: u64,
    pub data_updated_at: Option<DateTime<Utc>>,
    pub data: Vec<Resource>,
}

/// Pagination pointers within a collection page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pages {
    pub per_page: u64,
    pub next_url: Option<String>,
    pub previous_url: Option<String>,
}

/// Envelope around a single resource in a collection's `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u64,
    pub object: String,
    pub url: String,
    pub data_updated_at: DateTime<Utc>,
    pub data: LevelProgression,
}

/// A user's progress through one WaniKani level.
///
/// `passed_at` is null while the level is still in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelProgression {
    pub level: u32,
    pub created_at: DateTime<Utc>,
    pub unlocked_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub passed_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub abandoned_at: Option<DateTime<Utc>>,
}
