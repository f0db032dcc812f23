use mindnav_core::models::usage::{ModelPricing, TokenUsage};

/// Known model pricing (per million tokens).
/// These are approximate and should be updated as pricing changes.
pub fn pricing_for(model_id: &str) -> Option<ModelPricing> {
    match model_id {
        id if id.contains("claude-opus-4") => Some(ModelPricing {
            input_per_million: 15.0,
            output_per_million: 75.0,
        }),
        id if id.contains("claude-sonnet-4") => Some(ModelPricing {
            input_per_million: 3.0,
            output_per_million: 15.0,
        }),
        id if id.contains("claude-haiku") => Some(ModelPricing {
            input_per_million: 0.80,
            output_per_million: 4.0,
        }),
        _ => None,
    }
}

/// Build a `TokenUsage` from a Converse response, priced when the model is
/// known and zero-cost otherwise.
pub fn usage_with_cost(
    model_id: &str,
    usage: &aws_sdk_bedrockruntime::types::TokenUsage,
) -> TokenUsage {
    let input_tokens = usage.input_tokens as u64;
    let output_tokens = usage.output_tokens as u64;
    let cost_usd = pricing_for(model_id)
        .map(|p| p.cost_for(input_tokens, output_tokens))
        .unwrap_or(0.0);

    TokenUsage {
        input_tokens,
        output_tokens,
        cost_usd,
    }
}
