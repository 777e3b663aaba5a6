// crates/skysift-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SieveError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Threshold file invalid: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, SieveError>;
