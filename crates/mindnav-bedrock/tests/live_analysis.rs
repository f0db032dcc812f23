//! Live integration test for report analysis.
//!
//! Calls the real Bedrock API and requires valid credentials in the
//! environment (e.g. `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`).
//!
//! Run with: `cargo test -p mindnav-bedrock --test live_analysis -- --ignored`

use uuid::Uuid;

use mindnav_bedrock::analysis::{bedrock_client, generate_analysis, model_id_from_env};
use mindnav_core::models::response::AgeGroup;
use mindnav_core::models::score::{CategoryScore, QuizResult};
use mindnav_core::s3_keys;

fn sample_result() -> QuizResult {
    let id = Uuid::new_v4();
    let scores = vec![
        CategoryScore {
            key: "ADD".to_string(),
            name: "Aandacht & Focus".to_string(),
            score: 2.6,
            threshold: 2.0,
            triggered: true,
        },
        CategoryScore {
            key: "HSP".to_string(),
            name: "Prikkelverwerking".to_string(),
            score: 1.4,
            threshold: 2.8,
            triggered: false,
        },
    ];

    QuizResult {
        id,
        age_group: AgeGroup::Teen12To14,
        scores,
        summary: "Verhoogde score op: Aandacht & Focus.".to_string(),
        s3_key: s3_keys::quiz_result(id),
        created_at: jiff::Timestamp::now(),
        updated_at: jiff::Timestamp::now(),
    }
}

#[tokio::test]
#[ignore]
async fn analysis_produces_sections_for_a_sample_result() {
    let client = bedrock_client().await;
    let result = sample_result();

    let outcome = generate_analysis(
        &client,
        &model_id_from_env(),
        "Neurodiversiteit Quiz 12-14",
        &result,
    )
    .await
    .expect("analysis call failed");

    println!("=== raw analysis ===\n{}", outcome.raw_text);
    for section in &outcome.sections {
        println!("section: {} ({:?})", section.title, section.icon);
    }

    assert!(!outcome.raw_text.is_empty());
    assert!(!outcome.sections.is_empty());
    assert!(outcome.transaction.usage.output_tokens > 0);
}
