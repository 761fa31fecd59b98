//! Evaluation CLI: rank spots by each sentiment scoring method and report
//! MAP, MRR, and nDCG against the observed check-in ground truth.

use clap::Parser;
use spoteval::{
    dataset::Dataset,
    eval::{evaluate, render, RelevanceSet},
    Config,
};
use std::path::PathBuf;

/// Ranking-quality report: compare sentiment scoring methods against
/// check-in popularity.
#[derive(Parser, Debug)]
#[command(name = "spoteval")]
struct Args {
    /// Override the dataset path from config.toml.
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let args = Args::parse();
    let config = Config::load()?;

    let data_path = args
        .data
        .unwrap_or_else(|| config.dataset_path().to_path_buf());
    let dataset = Dataset::from_csv_path(&data_path)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", data_path.display(), e))?;

    let relevance_sets: Vec<RelevanceSet> = config
        .evaluation
        .relevance_sets
        .iter()
        .map(RelevanceSet::from)
        .collect();

    log::info!(
        "Evaluating {} spots against {} relevance subsets",
        dataset.len(),
        relevance_sets.len()
    );

    let evaluation = evaluate(&dataset, &relevance_sets, &config.evaluation.cutoffs);
    print!("{}", render(&evaluation));

    Ok(())
}
