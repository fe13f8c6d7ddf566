use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("failed to read csv: {0}")]
    CsvError(#[from] csv::Error),
    #[error("column '{0}' not found in csv headers")]
    ColumnNotFound(String),
    #[error("row {row} has no value in column {column}")]
    MissingValue { row: usize, column: usize },
    #[error("row {row}: '{value}' is not a number")]
    InvalidNumber { row: usize, value: String },
    #[error("acceleration profile holds no samples")]
    Empty
}
