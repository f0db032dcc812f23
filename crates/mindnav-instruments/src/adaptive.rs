//! Adaptive-phase allocation preview.
//!
//! The quiz builder lets an admin configure detection spectrums and phase-2
//! question budgets, then preview how one random run of the broad phase
//! would allocate deep-dive questions. Draws are uniform in [30, 100], so
//! re-running the preview yields fresh outcomes. The RNG is injected; the
//! allocation walk itself is deterministic given the draws.

use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A detection spectrum as configured in the quiz builder.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpectrumConfig {
    pub id: String,
    pub name: String,
    /// Trigger threshold on the simulated 30–100 score scale.
    pub threshold: f64,
}

/// Simulated outcome for one spectrum.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpectrumAllocation {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub triggered: bool,
    pub questions_assigned: u32,
}

/// One full preview run.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AllocationPreview {
    /// One entry per configured spectrum, in configuration order.
    pub spectrums: Vec<SpectrumAllocation>,
    pub total_assigned: u32,
}

/// Simulate one broad-phase run and allocate phase-2 questions.
///
/// Triggered spectrums are ranked by score descending and greedily granted
/// `min(max_per_spectrum, remaining budget)` questions each. A spectrum
/// reached after the budget runs out is granted 0, not dropped; untriggered
/// spectrums always get 0. The ranking sort is stable — equal scores keep
/// configuration order.
pub fn simulate_allocation<R: Rng + ?Sized>(
    spectrums: &[SpectrumConfig],
    max_per_spectrum: u32,
    max_total: u32,
    rng: &mut R,
) -> AllocationPreview {
    let mut results: Vec<SpectrumAllocation> = spectrums
        .iter()
        .map(|spectrum| {
            let score = rng.gen_range(30..=100) as f64;
            SpectrumAllocation {
                id: spectrum.id.clone(),
                name: spectrum.name.clone(),
                score,
                triggered: score >= spectrum.threshold,
                questions_assigned: 0,
            }
        })
        .collect();

    let mut ranked: Vec<usize> = (0..results.len())
        .filter(|&i| results[i].triggered)
        .collect();
    ranked.sort_by(|&a, &b| results[b].score.total_cmp(&results[a].score));

    let mut remaining = max_total;
    let mut total_assigned = 0u32;
    for index in ranked {
        let granted = max_per_spectrum.min(remaining);
        results[index].questions_assigned = granted;
        remaining -= granted;
        total_assigned += granted;
    }

    AllocationPreview {
        spectrums: results,
        total_assigned,
    }
}
