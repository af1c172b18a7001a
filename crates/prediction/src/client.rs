//! Classifier seam and HTTP client

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PredictionError;

/// Flat record of named string fields submitted to a model. Field names
/// must match what the model was trained on.
pub type FeatureRecord = HashMap<String, String>;

/// One classification result. Scores are probabilities in [0, 1] keyed by
/// label; the winning label's score is the model's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub predicted_label: String,
    #[serde(default)]
    pub predicted_scores: HashMap<String, f64>,
}

impl Prediction {
    /// Score the model assigned to its own winning label, if it reported one.
    pub fn winning_score(&self) -> Option<f64> {
        self.predicted_scores.get(&self.predicted_label).copied()
    }
}

/// One-shot request/response against a hosted model.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn predict(
        &self,
        model_id: &str,
        record: FeatureRecord,
    ) -> Result<Prediction, PredictionError>;
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    #[serde(rename = "MLModelId")]
    ml_model_id: String,
    #[serde(rename = "Record")]
    record: FeatureRecord,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(rename = "Prediction")]
    prediction: Prediction,
}

/// Classifier backed by the managed realtime prediction endpoint.
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn predict(
        &self,
        model_id: &str,
        record: FeatureRecord,
    ) -> Result<Prediction, PredictionError> {
        let url = format!("{}/predict", self.endpoint.trim_end_matches('/'));
        tracing::debug!(%model_id, fields = record.len(), "submitting prediction request");

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest {
                ml_model_id: model_id.to_string(),
                record,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::UnexpectedStatus {
                status: status.as_u16(),
                model_id: model_id.to_string(),
            });
        }

        let body: PredictResponse = response.json().await?;
        tracing::debug!(label = %body.prediction.predicted_label, "prediction returned");
        Ok(body.prediction)
    }
}
