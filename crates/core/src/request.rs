//! Inbound request model
//!
//! One `DialogRequest` arrives per conversation turn, produced by the dialog
//! platform. It is read-only to this service apart from the additive
//! session-attribute copy handlers take via [`DialogRequest::session_attributes`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot map as the platform sends it: a filled slot is a string, an
/// unfilled slot is an explicit null.
pub type Slots = HashMap<String, Option<String>>;

/// Conversation-scoped string map passed through across turns.
pub type SessionAttributes = HashMap<String, String>;

/// One fulfillment invocation from the dialog platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogRequest {
    pub bot: BotInfo,
    pub user_id: String,
    pub current_intent: CurrentIntent,
    /// The platform sends `null` on the first turn of a session.
    #[serde(default)]
    pub session_attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotInfo {
    pub name: String,
}

/// The intent the platform recognized, with its elicited slot values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Slots,
}

impl DialogRequest {
    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    /// Explicit optional slot lookup. A slot that is missing from the map,
    /// present-but-null, or an empty string all come back as `None`; call
    /// sites must decide what an unfilled slot means for them.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|value| value.as_deref())
            .filter(|value| !value.is_empty())
    }

    /// Owned session-attribute map for the response, treating the platform's
    /// `null` as an empty map.
    pub fn session_attributes(&self) -> SessionAttributes {
        self.session_attributes.clone().unwrap_or_default()
    }
}
