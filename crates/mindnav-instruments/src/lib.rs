//! mindnav-instruments
//!
//! Questionnaire definitions for the teen neurodiversity quiz. Pure data —
//! no AWS dependency. Defines the category tables, thresholds, and scoring
//! rules for each age-group variant, plus the adaptive-phase allocation
//! simulator used by the quiz-builder preview.

pub mod adaptive;
pub mod error;
pub mod questionnaires;
pub mod scoring;

use mindnav_core::models::response::{AgeGroup, QuizResponses};
use mindnav_core::models::score::CategoryScore;

use error::QuestionnaireError;
use scoring::{CategoryDef, ValidationError, average};

/// Trait implemented by each questionnaire variant.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier for this variant (e.g. "teen_12_14").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The age group this variant targets.
    fn age_group(&self) -> AgeGroup;

    /// The categories this questionnaire measures, in question order. Each
    /// category owns a run of consecutive base-question indices.
    fn categories(&self) -> &[CategoryDef];

    /// Number of base questions (sum of the per-category counts).
    fn base_question_count(&self) -> usize {
        self.categories().iter().map(|c| c.question_count).sum()
    }

    /// Trigger threshold for a category key. Unknown keys have none.
    fn threshold(&self, key: &str) -> Option<f64> {
        self.categories()
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.threshold)
    }

    /// Whether a score triggers the deep-dive phase for a category.
    ///
    /// The comparison is inclusive: a score exactly on the threshold
    /// triggers. Unknown category keys never trigger.
    fn is_triggered(&self, key: &str, score: f64) -> bool {
        self.threshold(key).is_some_and(|t| score >= t)
    }

    /// Compute per-category scores for a submission.
    ///
    /// Each category averages its consecutive slice of base answers plus
    /// all deep-dive answers under its key. Unanswered and non-positive
    /// entries are excluded; a category with no valid answers scores 0.
    /// Output order is table order.
    fn score_categories(&self, responses: &QuizResponses) -> Vec<CategoryScore> {
        let mut scores = Vec::with_capacity(self.categories().len());
        let mut start = 0usize;

        for category in self.categories() {
            let end = start + category.question_count;
            let mut values: Vec<Option<f64>> = responses
                .base_answers
                .get(start..end.min(responses.base_answers.len()))
                .unwrap_or(&[])
                .to_vec();
            if let Some(subtest) = responses.subtest_answers.get(&category.key) {
                values.extend_from_slice(subtest);
            }

            let score = average(&values);
            scores.push(CategoryScore {
                key: category.key.clone(),
                name: category.name.clone(),
                score,
                threshold: category.threshold,
                triggered: self.is_triggered(&category.key, score),
            });
            start = end;
        }

        scores
    }

    /// Validate that all supplied answers are on the 1–4 scale.
    ///
    /// Out-of-range answers are reported, not fatal — the scorer ignores
    /// non-positive values and averages whatever else is present.
    fn validate_responses(&self, responses: &QuizResponses) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (index, answer) in responses.base_answers.iter().enumerate() {
            if let Some(value) = answer
                && !(1.0..=4.0).contains(value)
            {
                errors.push(ValidationError {
                    question_index: index,
                    category_key: None,
                    value: *value,
                    message: format!(
                        "{}: answer {} at question {} is outside the 1-4 scale",
                        self.name(),
                        value,
                        index,
                    ),
                });
            }
        }

        for (key, answers) in &responses.subtest_answers {
            for (index, answer) in answers.iter().enumerate() {
                if let Some(value) = answer
                    && !(1.0..=4.0).contains(value)
                {
                    errors.push(ValidationError {
                        question_index: index,
                        category_key: Some(key.clone()),
                        value: *value,
                        message: format!(
                            "{}: deep-dive answer {} at question {} ({}) is outside the 1-4 scale",
                            self.name(),
                            value,
                            index,
                            key,
                        ),
                    });
                }
            }
        }

        errors
    }
}

/// Return all questionnaire variants.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::teen_12_14::Teen12To14),
        Box::new(questionnaires::teen_15_18::Teen15To18),
    ]
}

/// Look up a questionnaire variant by ID.
pub fn get_questionnaire(id: &str) -> Result<Box<dyn Questionnaire>, QuestionnaireError> {
    all_questionnaires()
        .into_iter()
        .find(|q| q.id() == id)
        .ok_or_else(|| QuestionnaireError::UnknownQuestionnaire(id.to_string()))
}

/// Select the questionnaire variant for an age group.
pub fn for_age_group(age_group: AgeGroup) -> Box<dyn Questionnaire> {
    match age_group {
        AgeGroup::Teen12To14 => Box::new(questionnaires::teen_12_14::Teen12To14),
        AgeGroup::Teen15To18 => Box::new(questionnaires::teen_15_18::Teen15To18),
    }
}
