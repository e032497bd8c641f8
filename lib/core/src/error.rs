use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataLoadError>;

/// Failures while reading the star-tier partitions.
///
/// All of these are fatal at startup: no partial dataset is ever served.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Data source not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("CSV error in {source_name}: {message}")]
    Csv { source_name: String, message: String },

    #[error("Missing required column '{column}' in {source_name}")]
    MissingColumn { source_name: String, column: String },

    #[error("Malformed row {row} in {source_name}: {message}")]
    Malformed {
        source_name: String,
        row: usize,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
