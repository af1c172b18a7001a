//! Question-lookup handler
//!
//! Submits the user's free-text question to the solution model. The model
//! answers with either a solution string or the sentinel label "none"; both
//! branches close the turn as Fulfilled and record the raw label in the
//! session attributes.

use helpdesk_bot_config::constants::{record_fields, session_keys, slots, NO_SOLUTION_LABEL};
use helpdesk_bot_core::{
    close, elicit_slot, DialogMessage, DialogRequest, DialogResponse, FulfillmentState,
};
use helpdesk_bot_prediction::FeatureRecord;

use crate::agent::FulfillmentAgent;
use crate::error::AgentError;

const NO_SOLUTION_MESSAGE: &str = "sorry, cannot find a solution for your question at the \
                                   monment, please contact our local IT ext:89999";

impl FulfillmentAgent {
    pub(crate) async fn check_wiki(
        &self,
        request: &DialogRequest,
    ) -> Result<DialogResponse, AgentError> {
        let session_attributes = request.session_attributes();

        let Some(question) = request.slot(slots::QUESTION) else {
            return Ok(elicit_slot(
                session_attributes,
                request.intent_name(),
                request.current_intent.slots.clone(),
                slots::QUESTION,
                DialogMessage::plain_text("What question would you like me to look up?"),
            ));
        };
        tracing::debug!(%question, "looking for a solution");

        let features =
            FeatureRecord::from([(record_fields::SUMMARY.to_string(), question.to_string())]);
        let prediction = self
            .classifier
            .predict(&self.solution_model_id, features)
            .await?;

        let label = prediction.predicted_label;
        let content = if label == NO_SOLUTION_LABEL {
            NO_SOLUTION_MESSAGE.to_string()
        } else {
            format!("here is the solution for your reference: {label}")
        };

        let mut session_attributes = session_attributes;
        session_attributes.insert(session_keys::SOLUTION.to_string(), label);

        Ok(close(
            session_attributes,
            FulfillmentState::Fulfilled,
            DialogMessage::plain_text(content),
        ))
    }
}
