//! Evaluation: relevance reference data, ranking metrics (AP, MRR, DCG/nDCG),
//! and report assembly.

pub mod metrics;
pub mod relevance;
pub mod report;

pub use metrics::{
    average_precision, dcg, mean_reciprocal_rank, ndcg, position_scores, reciprocal_rank,
};
pub use relevance::{IdealScoreMap, RelevanceSet};
pub use report::{evaluate, render, Evaluation, MethodReport};
