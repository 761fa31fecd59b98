//! Relevance reference data: named relevance subsets and the positional gain
//! map derived from the ground-truth ranking.

use crate::config::RelevanceSetConfig;
use std::collections::{HashMap, HashSet};

/// A named, fixed subset of spot ids treated as the targets for one query
/// context.
///
/// Defined independently of the dataset: a member id that never appears in a
/// ranking is simply a non-hit, never an error. Metrics depend only on set
/// membership, so the enumeration order of the configured ids is irrelevant.
#[derive(Debug, Clone)]
pub struct RelevanceSet {
    name: String,
    spots: HashSet<String>,
}

impl RelevanceSet {
    pub fn new<I, S>(name: impl Into<String>, spots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            spots: spots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, spot_id: &str) -> bool {
        self.spots.contains(spot_id)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

impl From<&RelevanceSetConfig> for RelevanceSet {
    fn from(config: &RelevanceSetConfig) -> Self {
        Self::new(config.name.clone(), config.spots.iter().cloned())
    }
}

/// Positional gain per spot: the top spot of the ground-truth ranking gets
/// gain N (the dataset size), the next N-1, down to 1.
///
/// The gain is the rank-position score, not the raw popularity value itself.
#[derive(Debug, Clone)]
pub struct IdealScoreMap {
    gains: HashMap<String, f32>,
    size: usize,
}

impl IdealScoreMap {
    /// Assign gains N..1 down the given ground-truth ranking.
    pub fn from_ranking(ranking: &[String]) -> Self {
        let size = ranking.len();
        let gains = ranking
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), (size - i) as f32))
            .collect();
        Self { gains, size }
    }

    /// Gain for one spot; ids outside the ranking score 0.
    pub fn gain(&self, spot_id: &str) -> f32 {
        self.gains.get(spot_id).copied().unwrap_or(0.0)
    }

    /// First `k` values of the ideal gain sequence (N, N-1, ...). This is the
    /// global ideal truncated, never a re-sorted top-k of a recommendation.
    pub fn ideal_prefix(&self, k: usize) -> Vec<f32> {
        (0..k.min(self.size)).map(|i| (self.size - i) as f32).collect()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}
