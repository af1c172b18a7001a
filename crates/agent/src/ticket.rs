//! Ticket-priority handler
//!
//! Fetches the ticket record by exact key, asks the priority model for a
//! label, and closes the turn with the predicted priority, the model's
//! confidence, and a severity advisory. A ticket missing from the store is a
//! recovered path (the result set is simply empty); store or model faults
//! propagate to the caller.

use helpdesk_bot_config::constants::{record_fields, session_keys, slots};
use helpdesk_bot_core::{
    close, elicit_slot, DialogMessage, DialogRequest, DialogResponse, FulfillmentState,
};
use helpdesk_bot_prediction::FeatureRecord;

use crate::agent::FulfillmentAgent;
use crate::error::AgentError;
use crate::severity::Severity;

impl FulfillmentAgent {
    pub(crate) async fn check_ticket(
        &self,
        request: &DialogRequest,
    ) -> Result<DialogResponse, AgentError> {
        let session_attributes = request.session_attributes();

        let Some(ticket_number) = request.slot(slots::TICKET_NUMBER) else {
            // Unfilled slot: re-ask instead of formatting a null into copy.
            return Ok(elicit_slot(
                session_attributes,
                request.intent_name(),
                request.current_intent.slots.clone(),
                slots::TICKET_NUMBER,
                DialogMessage::plain_text("Please tell me the ticket number you want me to check."),
            ));
        };
        tracing::debug!(%ticket_number, "checking ticket priority");

        // Empty result set means the ticket is not there; only transport or
        // store failures surface as errors.
        let Some(record) = self.store.fetch(ticket_number).await? else {
            return Ok(close(
                session_attributes,
                FulfillmentState::Fulfilled,
                DialogMessage::plain_text(format!(
                    "Ticket: {ticket_number} not exist in DB yet, please try another one."
                )),
            ));
        };

        let features = FeatureRecord::from([
            (
                record_fields::INCIDENT_NUMBER.to_string(),
                record.incident_number,
            ),
            (
                record_fields::AFFECTED_END_USER.to_string(),
                record.affected_end_user,
            ),
            (record_fields::CI.to_string(), record.configuration_item),
            (record_fields::SUMMARY.to_string(), record.summary),
        ]);
        let prediction = self
            .classifier
            .predict(&self.priority_model_id, features)
            .await?;

        let label = prediction.predicted_label.clone();
        let severity = Severity::from_label(&label);
        // A model that omits the score for its own winning label renders as
        // 0.0% rather than failing the turn.
        let confidence = format_confidence(prediction.winning_score().unwrap_or(0.0));
        tracing::debug!(%ticket_number, %label, %confidence, "priority predicted");

        let mut session_attributes = session_attributes;
        session_attributes.insert(
            session_keys::TICKET_NUMBER.to_string(),
            ticket_number.to_string(),
        );

        Ok(close(
            session_attributes,
            FulfillmentState::Fulfilled,
            DialogMessage::plain_text(format!(
                "I think ticket: {ticket_number} is a Priority{label} case. \
                 Predicted posibility: {confidence}%. \r{advisory}",
                advisory = severity.advisory(),
            )),
        ))
    }
}

/// Confidence percentage: round(score * 100, 2), rendered with at least one
/// decimal place so 0.91 reads "91.0" and 1.0 reads "100.0".
pub(crate) fn format_confidence(score: f64) -> String {
    let percent = (score * 10_000.0).round() / 100.0;
    let mut rendered = format!("{percent}");
    if !rendered.contains('.') {
        rendered.push_str(".0");
    }
    rendered
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use helpdesk_bot_config::PredictionConfig;
    use helpdesk_bot_core::DialogAction;
    use helpdesk_bot_persistence::{InMemoryTicketStore, TicketRecord};
    use helpdesk_bot_prediction::{Prediction, SimulatedClassifier};

    use super::*;

    const PRIORITY_MODEL: &str = "ml-priority";

    fn sample_record() -> TicketRecord {
        TicketRecord {
            incident_number: "INC000123".to_string(),
            affected_end_user: "jsmith".to_string(),
            configuration_item: "vpn-gateway-01".to_string(),
            summary: "VPN drops every few minutes".to_string(),
        }
    }

    fn prediction(label: &str, score: f64) -> Prediction {
        Prediction {
            predicted_label: label.to_string(),
            predicted_scores: HashMap::from([(label.to_string(), score)]),
        }
    }

    fn agent(
        store: Arc<InMemoryTicketStore>,
        classifier: Arc<SimulatedClassifier>,
    ) -> FulfillmentAgent {
        FulfillmentAgent::new(
            store,
            classifier,
            &PredictionConfig {
                endpoint: "http://localhost:9".to_string(),
                priority_model_id: PRIORITY_MODEL.to_string(),
                solution_model_id: "ml-solution".to_string(),
            },
        )
    }

    fn request(slot_value: Option<&str>) -> DialogRequest {
        let slots = match slot_value {
            Some(value) => serde_json::json!({ "ticketnumber": value }),
            None => serde_json::json!({ "ticketnumber": null }),
        };
        serde_json::from_value(serde_json::json!({
            "bot": { "name": "helpdesk" },
            "userId": "u",
            "currentIntent": { "name": "checkticket", "slots": slots },
            "sessionAttributes": { "foo": "bar" }
        }))
        .unwrap()
    }

    fn close_message(response: &DialogResponse) -> &str {
        match &response.dialog_action {
            DialogAction::Close { message, .. } => &message.content,
            other => panic!("expected Close, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_ticket_slot_elicits_it() {
        let classifier = Arc::new(SimulatedClassifier::new());
        let agent = agent(Arc::new(InMemoryTicketStore::new()), classifier.clone());

        let response = agent.check_ticket(&request(None)).await.unwrap();
        match response.dialog_action {
            DialogAction::ElicitSlot { slot_to_elicit, .. } => {
                assert_eq!(slot_to_elicit, "ticketnumber");
            }
            other => panic!("expected ElicitSlot, got {other:?}"),
        }
        assert_eq!(classifier.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_ticket_closes_without_calling_classifier() {
        let classifier = Arc::new(SimulatedClassifier::new());
        let agent = agent(Arc::new(InMemoryTicketStore::new()), classifier.clone());

        let response = agent.check_ticket(&request(Some("INC000999"))).await.unwrap();
        let message = close_message(&response);
        assert!(message.contains("INC000999"));
        assert!(message.contains("not exist in DB"));
        assert_eq!(classifier.call_count(), 0);
    }

    #[tokio::test]
    async fn test_priority_one_is_top_urgent() {
        let store = Arc::new(InMemoryTicketStore::new());
        store.insert(sample_record());
        let classifier =
            Arc::new(SimulatedClassifier::new().with_script(PRIORITY_MODEL, prediction("1", 0.8675)));
        let agent = agent(store, classifier);

        let response = agent.check_ticket(&request(Some("INC000123"))).await.unwrap();
        let message = close_message(&response);
        assert!(message.contains("Priority1"));
        assert!(message.contains("TOP URGENT"));
        assert!(message.contains("86.75%"));
    }

    #[tokio::test]
    async fn test_priority_three_is_eight_hours() {
        let store = Arc::new(InMemoryTicketStore::new());
        store.insert(sample_record());
        let classifier =
            Arc::new(SimulatedClassifier::new().with_script(PRIORITY_MODEL, prediction("3", 1.0)));
        let agent = agent(store, classifier);

        let response = agent.check_ticket(&request(Some("INC000123"))).await.unwrap();
        let message = close_message(&response);
        assert!(message.contains("Priority3"));
        assert!(message.contains("8 hours"));
        assert!(message.contains("100.0%"));
    }

    #[tokio::test]
    async fn test_unmapped_priority_defaults_to_same_day() {
        let store = Arc::new(InMemoryTicketStore::new());
        store.insert(sample_record());
        let classifier =
            Arc::new(SimulatedClassifier::new().with_script(PRIORITY_MODEL, prediction("9", 0.005)));
        let agent = agent(store, classifier);

        let response = agent.check_ticket(&request(Some("INC000123"))).await.unwrap();
        let message = close_message(&response);
        assert!(message.contains("Priority9"));
        assert!(message.contains("by today"));
        assert!(message.contains("0.5%"));
    }

    #[tokio::test]
    async fn test_existing_session_attributes_are_preserved() {
        let store = Arc::new(InMemoryTicketStore::new());
        store.insert(sample_record());
        let classifier =
            Arc::new(SimulatedClassifier::new().with_script(PRIORITY_MODEL, prediction("2", 0.91)));
        let agent = agent(store, classifier);

        let response = agent.check_ticket(&request(Some("INC000123"))).await.unwrap();
        assert_eq!(response.session_attributes.get("foo").map(String::as_str), Some("bar"));
        assert_eq!(
            response.session_attributes.get("Ticket number").map(String::as_str),
            Some("INC000123")
        );
    }

    #[tokio::test]
    async fn test_classifier_sees_the_four_trained_fields() {
        let store = Arc::new(InMemoryTicketStore::new());
        store.insert(sample_record());
        let classifier =
            Arc::new(SimulatedClassifier::new().with_script(PRIORITY_MODEL, prediction("2", 0.91)));
        let agent = agent(store, classifier.clone());

        agent.check_ticket(&request(Some("INC000123"))).await.unwrap();
        let calls = classifier.calls();
        assert_eq!(calls.len(), 1);
        let (model_id, record) = &calls[0];
        assert_eq!(model_id, PRIORITY_MODEL);
        assert_eq!(record.get("IncidentNumber").map(String::as_str), Some("INC000123"));
        assert_eq!(record.get("AffectedEndUser").map(String::as_str), Some("jsmith"));
        assert_eq!(record.get("CI").map(String::as_str), Some("vpn-gateway-01"));
        assert_eq!(
            record.get("Summary").map(String::as_str),
            Some("VPN drops every few minutes")
        );
        assert_eq!(record.len(), 4);
    }

    #[tokio::test]
    async fn test_classifier_fault_propagates_unrecovered() {
        let store = Arc::new(InMemoryTicketStore::new());
        store.insert(sample_record());
        // No script for the priority model: the predict call errors.
        let classifier = Arc::new(SimulatedClassifier::new());
        let agent = agent(store, classifier);

        let error = agent
            .check_ticket(&request(Some("INC000123")))
            .await
            .unwrap_err();
        assert!(matches!(error, AgentError::Prediction(_)));
    }

    #[tokio::test]
    async fn test_missing_winning_score_renders_zero() {
        let store = Arc::new(InMemoryTicketStore::new());
        store.insert(sample_record());
        let classifier = Arc::new(SimulatedClassifier::new().with_script(
            PRIORITY_MODEL,
            Prediction {
                predicted_label: "2".to_string(),
                predicted_scores: HashMap::new(),
            },
        ));
        let agent = agent(store, classifier);

        let response = agent.check_ticket(&request(Some("INC000123"))).await.unwrap();
        let message = close_message(&response);
        assert!(message.contains("Predicted posibility: 0.0%"));
    }

    #[test]
    fn test_confidence_formatting_grid() {
        assert_eq!(format_confidence(0.8675), "86.75");
        assert_eq!(format_confidence(1.0), "100.0");
        assert_eq!(format_confidence(0.005), "0.5");
        assert_eq!(format_confidence(0.91), "91.0");
    }
}
