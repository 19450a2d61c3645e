//! Ratings models: rankings, per-major statistics, and submissions

use serde::{Deserialize, Serialize};

/// Summary statistics for one major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorStats {
    pub major: String,
    pub total_classes: u32,
    pub total_users: u32,
    pub average_difficulty: f64,
}

impl MajorStats {
    /// Zero-valued placeholder used when the stats fetch for a major fails
    pub fn empty(major: &str) -> Self {
        MajorStats {
            major: major.to_string(),
            total_classes: 0,
            total_users: 0,
            average_difficulty: 0.0,
        }
    }
}

/// Per-professor rating aggregate within a class ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessorSummary {
    pub name: String,
    pub avg_rating: f64,
    pub rating_count: u32,
}

/// One entry of the ranked class list for a major
///
/// Read-only from the client's perspective; the server recomputes the
/// aggregates from submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRanking {
    pub class_code: String,
    pub class_name: String,
    pub major: String,
    pub average_difficulty: f64,
    pub total_submissions: u32,
    pub professors: Vec<ProfessorSummary>,
}

/// A user-authored 1-10 difficulty rating for a class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultySubmission {
    pub class_code: String,
    pub class_name: String,
    pub major: String,
    pub difficulty_rating: u8,
    pub professor: String,
    pub semester: String,
}

/// A user-authored 1.0-5.0 professor rating with an optional review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessorRatingSubmission {
    pub professor: String,
    pub class_code: String,
    pub rating: f64,
    #[serde(default)]
    pub review: String,
    pub major: String,
    pub semester: String,
}
