//! Ranking: descending stable sort of spots on a chosen numeric field.

use crate::dataset::{Dataset, SpotRecord};

/// Numeric field a ranking can be keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    /// Observed check-in count (defines the ground truth).
    Check,
    /// Sentiment score weighted by review volume.
    WeightedSentiment,
    /// Sentiment score normalized per review.
    NormalizedSentiment,
}

impl ScoreField {
    /// The field value for one record.
    pub fn value(self, record: &SpotRecord) -> f32 {
        match self {
            ScoreField::Check => record.check,
            ScoreField::WeightedSentiment => record.weighted_sentiment_score,
            ScoreField::NormalizedSentiment => record.normalized_sentiment_score,
        }
    }

    /// Label used in the report output.
    pub fn label(self) -> &'static str {
        match self {
            ScoreField::Check => "Check",
            ScoreField::WeightedSentiment => "Weighted Sentiment Score",
            ScoreField::NormalizedSentiment => "Normalized Sentiment Score",
        }
    }
}

/// Rank all spot ids by `field`, descending.
///
/// The sort is stable: spots with equal keys keep their dataset (file) order.
/// That tie-break is observable in every downstream metric, so it must not be
/// swapped for an unstable sort. The returned list always covers the whole
/// dataset; truncation to a cutoff happens at metric-evaluation time.
pub fn rank_by(dataset: &Dataset, field: ScoreField) -> Vec<String> {
    let mut order: Vec<&SpotRecord> = dataset.records().iter().collect();
    order.sort_by(|a, b| field.value(b).total_cmp(&field.value(a)));
    order.iter().map(|r| r.spot_id.clone()).collect()
}
