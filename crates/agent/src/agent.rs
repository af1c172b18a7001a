//! Intent dispatch

use std::sync::Arc;

use helpdesk_bot_config::constants::intents;
use helpdesk_bot_config::PredictionConfig;
use helpdesk_bot_core::{DialogRequest, DialogResponse};
use helpdesk_bot_persistence::TicketStore;
use helpdesk_bot_prediction::Classifier;

use crate::error::AgentError;

/// Routes invocations to intent handlers and holds the service seams they
/// share. Stateless across invocations; everything conversation-scoped rides
/// in the request's session attributes.
pub struct FulfillmentAgent {
    pub(crate) store: Arc<dyn TicketStore>,
    pub(crate) classifier: Arc<dyn Classifier>,
    pub(crate) priority_model_id: String,
    pub(crate) solution_model_id: String,
}

impl FulfillmentAgent {
    pub fn new(
        store: Arc<dyn TicketStore>,
        classifier: Arc<dyn Classifier>,
        prediction: &PredictionConfig,
    ) -> Self {
        Self {
            store,
            classifier,
            priority_model_id: prediction.priority_model_id.clone(),
            solution_model_id: prediction.solution_model_id.clone(),
        }
    }

    /// Route one invocation by intent name. Adding an intent is one match
    /// arm plus one handler.
    pub async fn dispatch(&self, request: &DialogRequest) -> Result<DialogResponse, AgentError> {
        tracing::debug!(
            user_id = %request.user_id,
            intent = %request.intent_name(),
            "dispatching intent"
        );

        match request.intent_name() {
            intents::CHECK_TICKET => self.check_ticket(request).await,
            intents::CHECK_WIKI => self.check_wiki(request).await,
            other => Err(AgentError::UnsupportedIntent(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_bot_persistence::InMemoryTicketStore;
    use helpdesk_bot_prediction::SimulatedClassifier;

    fn agent_with(classifier: Arc<SimulatedClassifier>) -> FulfillmentAgent {
        FulfillmentAgent::new(
            Arc::new(InMemoryTicketStore::new()),
            classifier,
            &PredictionConfig {
                endpoint: "http://localhost:9".to_string(),
                priority_model_id: "ml-priority".to_string(),
                solution_model_id: "ml-solution".to_string(),
            },
        )
    }

    fn request_for(intent: &str) -> DialogRequest {
        serde_json::from_value(serde_json::json!({
            "bot": { "name": "helpdesk" },
            "userId": "u",
            "currentIntent": { "name": intent, "slots": {} },
            "sessionAttributes": null
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_intent_fails_without_running_any_handler() {
        let classifier = Arc::new(SimulatedClassifier::new());
        let agent = agent_with(classifier.clone());

        let result = agent.dispatch(&request_for("orderpizza")).await;
        match result {
            Err(AgentError::UnsupportedIntent(name)) => assert_eq!(name, "orderpizza"),
            other => panic!("expected UnsupportedIntent, got {other:?}"),
        }
        assert_eq!(classifier.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_intent_message_names_the_intent() {
        let agent = agent_with(Arc::new(SimulatedClassifier::new()));
        let error = agent.dispatch(&request_for("weather")).await.unwrap_err();
        assert_eq!(error.to_string(), "Intent with name weather not supported");
    }
}
