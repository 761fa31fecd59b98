pub mod config;
pub mod error;
pub mod dataset;
pub mod rank;
pub mod eval;

pub use config::Config;
pub use error::{SpotevalError, Result};
pub use dataset::{Dataset, SpotRecord};
pub use rank::{rank_by, ScoreField};
