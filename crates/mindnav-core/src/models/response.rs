use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Age group of the participant, selecting the questionnaire variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AgeGroup {
    #[serde(rename = "12-14")]
    Teen12To14,
    #[serde(rename = "15-18")]
    Teen15To18,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Teen12To14 => "12-14",
            AgeGroup::Teen15To18 => "15-18",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "12-14" => Ok(AgeGroup::Teen12To14),
            "15-18" => Ok(AgeGroup::Teen15To18),
            other => Err(CoreError::UnknownAgeGroup(other.to_string())),
        }
    }
}

/// Dutch label for an ordinal answer value (1–4).
pub fn answer_label(value: u8) -> Option<&'static str> {
    match value {
        1 => Some("Nooit"),
        2 => Some("Soms"),
        3 => Some("Vaak"),
        4 => Some("Altijd"),
        _ => None,
    }
}

/// A raw quiz submission.
///
/// Base answers are positional — index order matches the questionnaire's
/// question order — with `None` marking an unanswered question. Deep-dive
/// answers are grouped per category key.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizResponses {
    pub age_group: AgeGroup,
    pub base_answers: Vec<Option<f64>>,
    #[serde(default)]
    pub subtest_answers: HashMap<String, Vec<Option<f64>>>,
}
