use etoile_core::DataLoadError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to load dataset: {0}")]
    Load(#[from] DataLoadError),
}
