//! Majority-vote aggregation of per-model predictions.

use crate::api::{PredictionSet, Verdict};

/// Outcome of aggregating all returned model predictions for one email.
///
/// Derived on demand from a [`PredictionSet`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsensusResult {
    /// Number of models that voted spam.
    pub spam_votes: usize,
    /// Number of models present in the set.
    pub total_models: usize,
    /// Majority verdict across the returned models.
    pub verdict: Verdict,
    /// Fraction of models that voted spam, in `[0, 1]`.
    pub agreement_ratio: f32,
}

/// Reduce a prediction set to its consensus verdict.
///
/// The verdict is spam only on a strict majority; an even split resolves to
/// ham, which is a fixed policy rather than an error. Returns `None` for an
/// empty set, where no consensus is defined.
pub fn consensus(predictions: &PredictionSet) -> Option<ConsensusResult> {
    let total_models = predictions.len();
    if total_models == 0 {
        return None;
    }
    let spam_votes = predictions
        .values()
        .filter(|result| result.prediction == Verdict::Spam)
        .count();
    let verdict = if spam_votes * 2 > total_models {
        Verdict::Spam
    } else {
        Verdict::Ham
    };
    Some(ConsensusResult {
        spam_votes,
        total_models,
        verdict,
        agreement_ratio: spam_votes as f32 / total_models as f32,
    })
}
