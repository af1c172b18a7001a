//! Handler error types

use helpdesk_bot_persistence::StoreError;
use helpdesk_bot_prediction::PredictionError;
use thiserror::Error;

/// Faults that terminate an invocation. A ticket that does not exist is NOT
/// one of these; that path is recovered into a user-visible Close response.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),
}
