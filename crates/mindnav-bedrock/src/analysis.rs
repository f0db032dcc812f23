//! Report-analysis generation via the Bedrock Converse API.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use mindnav_core::models::score::QuizResult;
use mindnav_core::models::section::ReportSection;
use mindnav_core::models::transaction::{AnalysisTransaction, TransactionStatus};
use mindnav_core::models::usage::TokenUsage;
use mindnav_core::s3_keys;

use crate::error::BedrockError;
use crate::prompt::{ANALYSIS_SYSTEM_PROMPT, build_score_block};
use crate::sections::parse_report_sections;
use crate::tokens;

/// Default model: EU inference profile (the platform serves Dutch users).
/// Override with `MINDNAV_MODEL_ID`.
pub const DEFAULT_MODEL_ID: &str = "eu.anthropic.claude-sonnet-4-20250514-v1:0";

/// Resolve the model ID from the environment, falling back to the default.
pub fn model_id_from_env() -> String {
    std::env::var("MINDNAV_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string())
}

/// Load AWS configuration from the environment and build a Bedrock runtime
/// client.
pub async fn bedrock_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}

/// The outcome of one analysis invocation, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub transaction: AnalysisTransaction,
    /// The model's full response, persisted verbatim.
    pub raw_text: String,
    /// Sections split out of the raw text for rendering.
    pub sections: Vec<ReportSection>,
}

/// Generate the AI analysis for a scored quiz result.
///
/// Sends the score block with the Dutch analysis system prompt, then splits
/// the response into renderable sections. The split is total: however far
/// the model strays from the expected format, the raw text is still
/// returned and the section list degrades gracefully.
pub async fn generate_analysis(
    client: &Client,
    model_id: &str,
    questionnaire_name: &str,
    result: &QuizResult,
) -> Result<AnalysisOutcome, BedrockError> {
    let transaction_id = Uuid::new_v4();
    info!(
        transaction_id = %transaction_id,
        model = model_id,
        result_id = %result.id,
        "starting report analysis"
    );

    let user_message = build_score_block(questionnaire_name, result.age_group, &result.scores);
    let (raw_text, usage) =
        invoke_converse(client, model_id, ANALYSIS_SYSTEM_PROMPT, &user_message).await?;

    if raw_text.trim().is_empty() {
        return Err(BedrockError::ResponseParse(
            "empty analysis response".to_string(),
        ));
    }

    let sections = parse_report_sections(&raw_text);

    info!(
        transaction_id = %transaction_id,
        sections = sections.len(),
        output_tokens = usage.output_tokens,
        "report analysis complete"
    );

    Ok(AnalysisOutcome {
        transaction: AnalysisTransaction {
            id: transaction_id,
            model_id: model_id.to_string(),
            usage,
            status: TransactionStatus::Complete,
            s3_key: s3_keys::report_transaction(result.id),
            created_at: jiff::Timestamp::now(),
        },
        raw_text,
        sections,
    })
}

/// Core invocation using the Bedrock Converse API.
/// Returns the response text and token usage.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<(String, TokenUsage), BedrockError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let usage = response
        .usage()
        .map(|u| tokens::usage_with_cost(model_id, u))
        .unwrap_or(TokenUsage {
            input_tokens: 0,
            output_tokens: 0,
            cost_usd: 0.0,
        });

    Ok((text, usage))
}
