use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),
}
