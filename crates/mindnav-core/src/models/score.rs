use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::response::AgeGroup;

/// A derived per-category score with its threshold decision.
/// Recomputed in full from the raw answers; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub key: String,
    pub name: String,
    pub score: f64,
    pub threshold: f64,
    pub triggered: bool,
}

/// A persisted quiz result.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizResult {
    pub id: Uuid,
    pub age_group: AgeGroup,
    pub scores: Vec<CategoryScore>,
    /// One-line Dutch summary of the triggered categories.
    pub summary: String,
    pub s3_key: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
