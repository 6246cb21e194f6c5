//! Error types for the talent inheritance predictor

use thiserror::Error;

/// Main error type for the talent inheritance predictor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    #[error("Invalid rarity {value} in {context}: expected a tier in 0..=4")]
    InvalidRarity { context: String, value: i64 },

    #[error("Missing rarity in {context}")]
    MissingRarity { context: String },

    #[error("Invalid mask length: expected 10 slots, got {0}")]
    InvalidMaskLength(usize),

    #[error("Parent pool {parent} has {len} entries, at most 10 are allowed")]
    PoolTooLarge { parent: char, len: usize },

    #[error("No trials were recorded, cannot select the most common outcome")]
    EmptyAggregation,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Talent table error: {0}")]
    TalentTable(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(feature = "python")]
impl From<PredictError> for pyo3::PyErr {
    fn from(err: PredictError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};

        match err {
            PredictError::EmptyAggregation => PyRuntimeError::new_err(err.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Result type alias for the talent inheritance predictor
pub type Result<T> = std::result::Result<T, PredictError>;
