//! Spot dataset: record type and CSV loader.

use crate::error::{Result, SpotevalError};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Columns the input file must carry. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    "SpotID",
    "Check",
    "weighted_sentiment_score",
    "normalized_sentiment_score",
];

/// A single spot observation. Score values are taken as already computed;
/// the loader applies no normalization or filtering.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotRecord {
    /// Unique spot identifier (e.g. "S001").
    #[serde(rename = "SpotID")]
    pub spot_id: String,
    /// Observed check-in count, the ground-truth popularity signal.
    #[serde(rename = "Check")]
    pub check: f32,
    /// Sentiment score weighted by review volume.
    pub weighted_sentiment_score: f32,
    /// Sentiment score normalized per review.
    pub normalized_sentiment_score: f32,
}

/// In-memory spot collection.
///
/// File order is preserved: it is the tie-break for equal sort keys when
/// ranking, so metric scores stay reproducible across runs.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<SpotRecord>,
}

impl Dataset {
    /// Build a dataset from already-parsed records.
    /// Rejects empty input and duplicate spot identifiers.
    pub fn from_records(records: Vec<SpotRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(SpotevalError::EmptyDataset);
        }
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.spot_id.as_str()) {
                return Err(SpotevalError::DuplicateSpot(record.spot_id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Load a dataset from a CSV file with a header row.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Load a dataset from any CSV source with a header row.
    ///
    /// The header must contain all required columns. A missing column or a
    /// non-numeric value in a numeric column fails the whole load; no partial
    /// dataset is ever produced.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(SpotevalError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for (idx, row) in rdr.deserialize::<SpotRecord>().enumerate() {
            let record =
                row.map_err(|e| SpotevalError::Parse(format!("row {}: {}", idx + 1, e)))?;
            records.push(record);
        }

        log::info!("Loaded {} spot records", records.len());
        Self::from_records(records)
    }

    /// Number of spots.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in file order.
    pub fn records(&self) -> &[SpotRecord] {
        &self.records
    }

    /// True if a spot with this identifier exists.
    pub fn contains(&self, spot_id: &str) -> bool {
        self.records.iter().any(|r| r.spot_id == spot_id)
    }
}
