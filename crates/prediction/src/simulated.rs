//! Simulated classifier
//!
//! Scripts a fixed prediction per model id and records every call so tests
//! can assert not just what came back but whether a model was consulted at
//! all (the not-found path must never reach the classifier).

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::client::{Classifier, FeatureRecord, Prediction};
use crate::error::PredictionError;

#[derive(Default)]
pub struct SimulatedClassifier {
    scripts: HashMap<String, Prediction>,
    calls: Mutex<Vec<(String, FeatureRecord)>>,
}

impl SimulatedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the prediction returned for `model_id`.
    pub fn with_script(mut self, model_id: impl Into<String>, prediction: Prediction) -> Self {
        self.scripts.insert(model_id.into(), prediction);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Model id and record of every call, in order.
    pub fn calls(&self) -> Vec<(String, FeatureRecord)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Classifier for SimulatedClassifier {
    async fn predict(
        &self,
        model_id: &str,
        record: FeatureRecord,
    ) -> Result<Prediction, PredictionError> {
        self.calls
            .lock()
            .push((model_id.to_string(), record.clone()));
        self.scripts
            .get(model_id)
            .cloned()
            .ok_or_else(|| PredictionError::UnknownModel {
                model_id: model_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(label: &str, score: f64) -> Prediction {
        Prediction {
            predicted_label: label.to_string(),
            predicted_scores: HashMap::from([(label.to_string(), score)]),
        }
    }

    #[tokio::test]
    async fn test_scripted_model_returns_and_records() {
        let classifier =
            SimulatedClassifier::new().with_script("ml-priority", prediction("2", 0.91));
        let record = FeatureRecord::from([("Summary".to_string(), "VPN down".to_string())]);

        let result = classifier.predict("ml-priority", record.clone()).await.unwrap();
        assert_eq!(result.predicted_label, "2");
        assert_eq!(classifier.call_count(), 1);
        assert_eq!(classifier.calls()[0], ("ml-priority".to_string(), record));
    }

    #[tokio::test]
    async fn test_unscripted_model_errors() {
        let classifier = SimulatedClassifier::new();
        let result = classifier.predict("ml-unknown", FeatureRecord::new()).await;
        assert!(matches!(
            result,
            Err(PredictionError::UnknownModel { model_id }) if model_id == "ml-unknown"
        ));
    }
}
