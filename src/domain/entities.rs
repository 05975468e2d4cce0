//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
