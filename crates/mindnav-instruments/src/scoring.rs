use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use mindnav_core::models::score::CategoryScore;

/// A category definition: a fixed run of consecutive base questions and the
/// trigger threshold for this questionnaire variant.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryDef {
    pub key: String,
    pub name: String,
    pub question_count: usize,
    pub threshold: f64,
}

/// Mean of the answers that are present and strictly positive.
///
/// Unanswered entries and zero/negative placeholders are excluded. An empty
/// filtered set yields 0.0 — never NaN — so threshold comparisons stay
/// well-defined downstream.
pub fn average(values: &[Option<f64>]) -> f64 {
    let valid: Vec<f64> = values
        .iter()
        .flatten()
        .copied()
        .filter(|v| *v > 0.0)
        .collect();

    if valid.is_empty() {
        return 0.0;
    }
    valid.iter().sum::<f64>() / valid.len() as f64
}

/// The persisted one-line summary of a scored submission (Dutch).
pub fn triggered_summary(scores: &[CategoryScore]) -> String {
    let triggered: Vec<&str> = scores
        .iter()
        .filter(|s| s.triggered)
        .map(|s| s.name.as_str())
        .collect();

    if triggered.is_empty() {
        "Geen verhoogde scores gevonden.".to_string()
    } else {
        format!("Verhoogde score op: {}.", triggered.join(", "))
    }
}

/// An out-of-range answer found during validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_index: usize,
    /// `None` for base answers, the category key for deep-dive answers.
    pub category_key: Option<String>,
    pub value: f64,
    pub message: String,
}
