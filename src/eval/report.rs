//! Evaluation orchestration and the printed report.
//!
//! `evaluate` is the whole pipeline after loading: rank, score, collect.
//! Rendering is separate so callers can use the numbers without the text.

use crate::dataset::Dataset;
use crate::eval::metrics::{average_precision, mean_reciprocal_rank, ndcg, position_scores};
use crate::eval::relevance::{IdealScoreMap, RelevanceSet};
use crate::rank::{rank_by, ScoreField};
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

/// Candidate scoring methods compared against the Check ground truth.
const METHODS: [ScoreField; 2] = [ScoreField::WeightedSentiment, ScoreField::NormalizedSentiment];

/// Scores for one candidate scoring method.
#[derive(Debug, Clone)]
pub struct MethodReport {
    /// The field the recommendation ranking was keyed on.
    pub field: ScoreField,
    /// Average precision against the full ground-truth top-N set. Reported
    /// under the conventional "MAP" label even though a single query is
    /// evaluated; generalizing to true multi-query MAP is a deliberate
    /// non-change until the metric consumers ask for it.
    pub map: f32,
    /// Mean reciprocal rank across the configured relevance subsets.
    pub mrr: f32,
    /// nDCG per configured cutoff, keyed by k.
    pub ndcg: BTreeMap<usize, f32>,
}

/// Full evaluation outcome, one entry per scoring method.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub methods: Vec<MethodReport>,
}

/// Evaluate both sentiment scoring methods against the Check ground truth.
///
/// The ground-truth ranking (Check descending) defines both the relevant set
/// for MAP (its full top-N) and the positional gains for nDCG. MRR averages
/// the reciprocal rank of the first hit over `relevance_sets`, one per query
/// context. Cutoffs larger than the dataset clamp to the full list.
pub fn evaluate(
    dataset: &Dataset,
    relevance_sets: &[RelevanceSet],
    cutoffs: &[usize],
) -> Evaluation {
    let ground_truth = rank_by(dataset, ScoreField::Check);
    let ideal = IdealScoreMap::from_ranking(&ground_truth);
    let truth_set: HashSet<String> = ground_truth.iter().cloned().collect();

    let methods = METHODS
        .iter()
        .map(|&field| {
            let ranking = rank_by(dataset, field);
            log::debug!("{} ranking: {:?}", field.label(), ranking);

            let map = average_precision(&ranking, &truth_set);
            let mrr = mean_reciprocal_rank(&ranking, relevance_sets);

            let scores = position_scores(&ranking, &ideal);
            let ndcg_at = cutoffs
                .iter()
                .map(|&k| {
                    let cut = k.min(scores.len());
                    (k, ndcg(&scores[..cut], &ideal.ideal_prefix(k)))
                })
                .collect();

            MethodReport {
                field,
                map,
                mrr,
                ndcg: ndcg_at,
            }
        })
        .collect();

    Evaluation { methods }
}

/// Render the evaluation as the standard text report: one labeled block per
/// scoring method, four decimals per metric. Printing is left to the caller.
pub fn render(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    for (i, method) in evaluation.methods.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}:", method.field.label());
        let _ = writeln!(out, "  MAP: {:.4}", method.map);
        let _ = writeln!(out, "  MRR: {:.4}", method.mrr);
        for (k, value) in &method.ndcg {
            let _ = writeln!(out, "  nDCG@{}: {:.4}", k, value);
        }
    }
    out
}
