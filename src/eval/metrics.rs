//! Ranking metrics: Average Precision, (Mean) Reciprocal Rank, and DCG/nDCG.
//!
//! Every function here is pure and total over well-formed inputs; the only
//! special cases are the documented zero-guards for degenerate inputs.

use crate::eval::relevance::{IdealScoreMap, RelevanceSet};
use std::collections::HashSet;

/// Average Precision: walk the retrieved list with a 1-based rank, add
/// hits-so-far / rank at every relevant position, divide by |relevant|.
/// Returns 0.0 when `relevant` is empty (guards the zero denominator).
pub fn average_precision(retrieved: &[String], relevant: &HashSet<String>) -> f32 {
    if relevant.is_empty() {
        return 0.0;
    }
    let mut hits = 0;
    let mut sum_precisions = 0.0;
    for (rank, spot) in retrieved.iter().enumerate() {
        if relevant.contains(spot) {
            hits += 1;
            sum_precisions += hits as f32 / (rank + 1) as f32;
        }
    }
    sum_precisions / relevant.len() as f32
}

/// Reciprocal rank of the first member of `relevant` found in `retrieved`;
/// 0.0 when no member appears.
pub fn reciprocal_rank(retrieved: &[String], relevant: &RelevanceSet) -> f32 {
    for (rank, spot) in retrieved.iter().enumerate() {
        if relevant.contains(spot) {
            return 1.0 / (rank + 1) as f32;
        }
    }
    0.0
}

/// Mean of `reciprocal_rank` over the named relevance subsets: one reciprocal
/// rank per query context, averaged. Returns 0.0 for an empty subset list.
pub fn mean_reciprocal_rank(retrieved: &[String], sets: &[RelevanceSet]) -> f32 {
    if sets.is_empty() {
        return 0.0;
    }
    let sum: f32 = sets.iter().map(|set| reciprocal_rank(retrieved, set)).sum();
    sum / sets.len() as f32
}

/// Per-position gains for a recommendation: each id mapped through the ideal
/// score map, 0.0 for ids the map does not know.
pub fn position_scores(recommendation: &[String], ideal: &IdealScoreMap) -> Vec<f32> {
    recommendation.iter().map(|spot| ideal.gain(spot)).collect()
}

/// Discounted cumulative gain: sum of scores[i] / log2(i + 2) over 0-based i.
/// The +2 puts rank 1 at log2(2) = 1, so the top position is undiscounted.
pub fn dcg(scores: &[f32]) -> f32 {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| score / (i as f32 + 2.0).log2())
        .sum()
}

/// Normalized DCG: dcg(recommended) / dcg(ideal); 0.0 when the ideal DCG is 0.
/// Callers evaluating at a cutoff k truncate both sequences to k beforehand.
pub fn ndcg(recommended_scores: &[f32], ideal_scores: &[f32]) -> f32 {
    let idcg = dcg(ideal_scores);
    if idcg == 0.0 {
        0.0
    } else {
        dcg(recommended_scores) / idcg
    }
}
