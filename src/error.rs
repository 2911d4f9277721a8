use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {row}, column '{column}': cannot parse '{value}' as a percentage")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },
    #[error("Row {row}, column '{column}': '{value}' is not numeric")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Duplicate entry for player '{name}' in season {season}")]
    DuplicateEntry { name: String, season: i32 },
    #[error("Vectors differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("Degenerate correlation: {reason}")]
    DegenerateCorrelation { reason: String },
}

pub type Result<T> = std::result::Result<T, StatsError>;
