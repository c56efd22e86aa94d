use thiserror::Error;

use crate::models::Sex;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("no reference rows for sex: {0}")]
    NoReferenceRows(Sex),

    #[error("degenerate reference data for {sex}: {distinct} distinct weight value(s), need at least 2")]
    DegenerateWeights { sex: Sex, distinct: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DietError>;
