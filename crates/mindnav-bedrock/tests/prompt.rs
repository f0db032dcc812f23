use mindnav_bedrock::prompt::{ANALYSIS_SYSTEM_PROMPT, build_score_block};
use mindnav_core::models::response::AgeGroup;
use mindnav_core::models::score::CategoryScore;

fn score(key: &str, name: &str, value: f64, threshold: f64) -> CategoryScore {
    CategoryScore {
        key: key.to_string(),
        name: name.to_string(),
        score: value,
        threshold,
        triggered: value >= threshold,
    }
}

#[test]
fn empty_scores_produce_empty_block() {
    assert_eq!(
        build_score_block("Neurodiversiteit Quiz 12-14", AgeGroup::Teen12To14, &[]),
        ""
    );
}

#[test]
fn block_wraps_scores_with_questionnaire_metadata() {
    let scores = vec![
        score("ADD", "Aandacht & Focus", 2.6, 2.0),
        score("HSP", "Prikkelverwerking", 1.2, 2.8),
    ];

    let block = build_score_block("Neurodiversiteit Quiz 12-14", AgeGroup::Teen12To14, &scores);

    assert!(block.starts_with("<quiz_scores>"));
    assert!(block.ends_with("</quiz_scores>"));
    assert!(block.contains("name=\"Neurodiversiteit Quiz 12-14\""));
    assert!(block.contains("age_group=\"12-14\""));
    assert!(block.contains("<category key=\"ADD\" score=\"2.60\" threshold=\"2.0\" triggered=\"true\">Aandacht & Focus</category>"));
    assert!(block.contains("key=\"HSP\""));
    assert!(block.contains("triggered=\"false\""));
}

#[test]
fn system_prompt_names_all_four_headers() {
    for header in [
        "Jouw Profiel In Vogelvlucht",
        "Sterke Kanten",
        "Aandachtspunten",
        "Tips voor Jou",
    ] {
        assert!(ANALYSIS_SYSTEM_PROMPT.contains(header));
    }
}
