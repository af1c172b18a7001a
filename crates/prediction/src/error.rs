//! Classifier error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("prediction endpoint returned unexpected status {status} for model {model_id}")]
    UnexpectedStatus {
        status: u16,
        model_id: String,
    },

    /// Simulated classifier was asked about a model it has no script for.
    #[error("no scripted prediction for model {model_id}")]
    UnknownModel { model_id: String },
}
