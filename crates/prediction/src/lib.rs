//! Hosted-classifier access for the helpdesk bot
//!
//! Two managed models sit behind one realtime endpoint: a ticket-priority
//! classifier and a free-text solution classifier. Both take a flat record
//! of named string fields and return a label plus per-label scores. This
//! crate owns the [`Classifier`] seam, the HTTP client, and a simulated
//! implementation for tests.

pub mod client;
pub mod error;
pub mod simulated;

pub use client::{Classifier, FeatureRecord, HttpClassifier, Prediction};
pub use error::PredictionError;
pub use simulated::SimulatedClassifier;
