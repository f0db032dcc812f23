use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Token counts and estimated cost for one model invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cost_usd: f64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Pricing per million tokens for a Bedrock model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelPricing {
    pub input_per_million: f64,
    pub output_per_million: f64,
}

impl ModelPricing {
    pub fn cost_for(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        let input = (input_tokens as f64 / 1_000_000.0) * self.input_per_million;
        let output = (output_tokens as f64 / 1_000_000.0) * self.output_per_million;
        input + output
    }
}
