//! Outbound response envelopes
//!
//! The platform accepts exactly four dialog-action shapes. The builders here
//! are total and side-effect-free; they do not validate their inputs because
//! the platform validates envelope shape on its side.

use serde::{Deserialize, Serialize};

use crate::request::{SessionAttributes, Slots};

/// Outcome of a completed conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// Plain-text message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogMessage {
    pub content_type: String,
    pub content: String,
}

impl DialogMessage {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: "PlainText".to_string(),
            content: content.into(),
        }
    }
}

/// The platform-defined action payloads, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    /// Ask the user for one specific named slot.
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: DialogMessage,
    },
    /// Ask the user to confirm before fulfilling.
    ConfirmIntent {
        intent_name: String,
        slots: Slots,
        message: DialogMessage,
    },
    /// Terminal action: the turn is complete.
    Close {
        fulfillment_state: FulfillmentState,
        message: DialogMessage,
    },
    /// Let the platform decide the next action.
    Delegate { slots: Slots },
}

/// The sole output contract toward the dialog platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: DialogMessage,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

pub fn confirm_intent(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    message: DialogMessage,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ConfirmIntent {
            intent_name: intent_name.into(),
            slots,
            message,
        },
    }
}

pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: DialogMessage,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}
