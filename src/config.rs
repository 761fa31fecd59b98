use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub evaluation: EvaluationConfig,
}

/// Input dataset location
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the spot CSV file (SpotID, Check, weighted_sentiment_score,
    /// normalized_sentiment_score).
    pub path: PathBuf,
}

/// Evaluation parameters: the fixed domain constants, kept out of the code so
/// they can vary per experiment without a rebuild.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    /// nDCG cutoffs to report.
    #[serde(default = "default_cutoffs")]
    pub cutoffs: Vec<usize>,
    /// Named relevance subsets, one per query context.
    pub relevance_sets: Vec<RelevanceSetConfig>,
}

/// One named relevance subset
#[derive(Debug, Clone, Deserialize)]
pub struct RelevanceSetConfig {
    pub name: String,
    pub spots: Vec<String>,
}

fn default_cutoffs() -> Vec<usize> {
    vec![5, 8]
}

impl Config {
    /// Load configuration from file
    ///
    /// Looks for config file in this order:
    /// 1. Path specified in SPOTEVAL_CONFIG environment variable
    /// 2. ./config.toml in current directory
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("SPOTEVAL_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&config_str).context("Failed to parse config.toml")?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !self.dataset.path.exists() {
            anyhow::bail!(
                "dataset path does not exist: {}. Set dataset.path in config.toml to your spot CSV file.",
                self.dataset.path.display()
            );
        }

        if self.evaluation.cutoffs.is_empty() {
            anyhow::bail!("evaluation.cutoffs must not be empty");
        }

        if self.evaluation.cutoffs.contains(&0) {
            anyhow::bail!("evaluation.cutoffs values must be greater than 0");
        }

        let mut seen_cutoffs = HashSet::new();
        for &k in &self.evaluation.cutoffs {
            if !seen_cutoffs.insert(k) {
                anyhow::bail!("evaluation.cutoffs contains duplicate cutoff {}", k);
            }
        }

        if self.evaluation.relevance_sets.is_empty() {
            anyhow::bail!("evaluation.relevance_sets must not be empty");
        }

        let mut seen_names = HashSet::new();
        for set in &self.evaluation.relevance_sets {
            if !seen_names.insert(set.name.as_str()) {
                anyhow::bail!("duplicate relevance set name: {}", set.name);
            }
            if set.spots.is_empty() {
                anyhow::bail!("relevance set {} has no spots", set.name);
            }
        }

        Ok(())
    }

    /// Get dataset path
    pub fn dataset_path(&self) -> &Path {
        &self.dataset.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serialize config tests that mutate process-wide env so they don't race.
    static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

    const SAMPLE_CSV: &str = "\
SpotID,Check,weighted_sentiment_score,normalized_sentiment_score
S001,412,0.81,0.74
";

    fn create_test_config(temp_dir: &TempDir) -> String {
        let data_path = temp_dir.path().join("spots.csv");
        fs::write(&data_path, SAMPLE_CSV).unwrap();
        let data_path_str = data_path.to_str().unwrap().replace('\\', "\\\\");
        format!(
            r#"
[dataset]
path = "{}"

[evaluation]
cutoffs = [5, 8]

[[evaluation.relevance_sets]]
name = "steins_gate"
spots = ["S001", "S003", "S004", "S002"]

[[evaluation.relevance_sets]]
name = "love_live"
spots = ["S005", "S007", "S006", "S008"]
"#,
            data_path_str
        )
    }

    fn with_config_env(config_path: &Path, f: impl FnOnce()) {
        let original = std::env::var("SPOTEVAL_CONFIG").ok();
        std::env::set_var("SPOTEVAL_CONFIG", config_path.to_str().unwrap());
        f();
        std::env::remove_var("SPOTEVAL_CONFIG");
        if let Some(val) = original {
            std::env::set_var("SPOTEVAL_CONFIG", val);
        }
    }

    #[test]
    fn test_config_load_success() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_content = create_test_config(&temp_dir);
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, config_content).unwrap();

        with_config_env(&config_path, || {
            let config = Config::load();
            assert!(config.is_ok(), "Config::load() failed: {:?}", config.err());
            let config = config.unwrap();
            assert_eq!(config.evaluation.cutoffs, vec![5, 8]);
            assert_eq!(config.evaluation.relevance_sets.len(), 2);
            assert_eq!(config.evaluation.relevance_sets[0].name, "steins_gate");
        });
    }

    #[test]
    fn test_config_invalid_path() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        with_config_env(Path::new("nonexistent.toml"), || {
            let config = Config::load();
            assert!(config.is_err());
        });
    }

    #[test]
    fn test_config_missing_dataset_file() {
        let _lock = CONFIG_TEST_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let config_content = create_test_config(&temp_dir);
        fs::remove_file(temp_dir.path().join("spots.csv")).unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, config_content).unwrap();

        with_config_env(&config_path, || {
            let config = Config::load();
            assert!(config.is_err());
            assert!(config
                .unwrap_err()
                .to_string()
                .contains("dataset path does not exist"));
        });
    }

    fn parse_with_dataset(temp_dir: &TempDir, evaluation: &str) -> Config {
        let data_path = temp_dir.path().join("spots.csv");
        fs::write(&data_path, SAMPLE_CSV).unwrap();
        let data_path_str = data_path.to_str().unwrap().replace('\\', "\\\\");
        let toml_str = format!("[dataset]\npath = \"{}\"\n\n{}", data_path_str, evaluation);
        toml::from_str(&toml_str).unwrap()
    }

    #[test]
    fn test_default_cutoffs_applied() {
        let temp_dir = TempDir::new().unwrap();
        let config = parse_with_dataset(
            &temp_dir,
            "[evaluation]\n[[evaluation.relevance_sets]]\nname = \"q\"\nspots = [\"S001\"]\n",
        );
        assert_eq!(config.evaluation.cutoffs, vec![5, 8]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_cutoff_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = parse_with_dataset(
            &temp_dir,
            "[evaluation]\ncutoffs = [0, 5]\n[[evaluation.relevance_sets]]\nname = \"q\"\nspots = [\"S001\"]\n",
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_duplicate_cutoff_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = parse_with_dataset(
            &temp_dir,
            "[evaluation]\ncutoffs = [5, 5]\n[[evaluation.relevance_sets]]\nname = \"q\"\nspots = [\"S001\"]\n",
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate cutoff"));
    }

    #[test]
    fn test_empty_relevance_sets_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = parse_with_dataset(&temp_dir, "[evaluation]\nrelevance_sets = []\n");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("relevance_sets"));
    }

    #[test]
    fn test_duplicate_set_name_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = parse_with_dataset(
            &temp_dir,
            "[evaluation]\n\
             [[evaluation.relevance_sets]]\nname = \"q\"\nspots = [\"S001\"]\n\
             [[evaluation.relevance_sets]]\nname = \"q\"\nspots = [\"S002\"]\n",
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate relevance set name"));
    }
}
