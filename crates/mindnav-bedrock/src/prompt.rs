//! Prompt assembly for the analysis call.
//!
//! The system prompt fixes the four section headers the renderer knows how
//! to display; the user message carries the scores in an XML-style block so
//! the model can separate instructions from data.

use mindnav_core::models::response::AgeGroup;
use mindnav_core::models::score::CategoryScore;

/// System prompt for the analysis call (Dutch).
pub const ANALYSIS_SYSTEM_PROMPT: &str = "\
Je bent een begripvolle coach voor neurodivergente jongeren. Je schrijft \
in het Nederlands, warm en zonder diagnoses te stellen. Schrijf op basis \
van de aangeleverde quizscores een analyse met precies deze vier kopjes, \
in deze volgorde:

Jouw Profiel In Vogelvlucht
Sterke Kanten
Aandachtspunten
Tips voor Jou

Onder het eerste kopje geef je per thema een regel in de vorm \
'Naam: score (korte toelichting)'. Onder de andere kopjes gebruik je \
korte opsommingen met streepjes. Gebruik geen markdown-opmaak.";

/// Build the score context block for the analysis user message.
///
/// An empty score list produces an empty string (nothing to analyze).
pub fn build_score_block(
    questionnaire_name: &str,
    age_group: AgeGroup,
    scores: &[CategoryScore],
) -> String {
    if scores.is_empty() {
        return String::new();
    }

    let mut block = String::from("<quiz_scores>\n");
    block.push_str(&format!(
        "<questionnaire name=\"{}\" age_group=\"{}\">\n",
        questionnaire_name,
        age_group.as_str(),
    ));
    for score in scores {
        block.push_str(&format!(
            "<category key=\"{}\" score=\"{:.2}\" threshold=\"{:.1}\" triggered=\"{}\">{}</category>\n",
            score.key, score.score, score.threshold, score.triggered, score.name,
        ));
    }
    block.push_str("</questionnaire>\n</quiz_scores>");
    block
}
