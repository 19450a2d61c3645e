//! Shared study note models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A study note as the API stores it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
}

/// Payload for creating a note
///
/// Tags are already normalized from the comma-separated form input by the
/// time this is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub course: String,
    pub tags: Vec<String>,
}
