use thiserror::Error;

/// Main error type for Spoteval
#[derive(Error, Debug)]
pub enum SpotevalError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the input header
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// The same spot identifier appears more than once in the input
    #[error("Duplicate spot: {0}")]
    DuplicateSpot(String),

    /// The input contained no records
    #[error("Empty dataset")]
    EmptyDataset,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient Result type using SpotevalError
pub type Result<T> = std::result::Result<T, SpotevalError>;
