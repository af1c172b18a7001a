//! Centralized constants for the helpdesk bot
//!
//! Single source of truth for the names the dialog platform and the managed
//! services contract on. The copy shown to users lives with the handlers;
//! the identifiers they key on live here.

/// Intent names as configured on the dialog platform.
pub mod intents {
    /// Ticket-priority lookup intent.
    pub const CHECK_TICKET: &str = "checkticket";

    /// Free-text solution lookup intent.
    pub const CHECK_WIKI: &str = "checkWIKI";
}

/// Slot names as configured on the dialog platform.
pub mod slots {
    /// Ticket identifier slot on the checkticket intent.
    pub const TICKET_NUMBER: &str = "ticketnumber";

    /// Free-text question slot on the checkWIKI intent.
    pub const QUESTION: &str = "question";
}

/// Session-attribute keys this service writes.
///
/// These are part of the conversation contract: downstream turns read them
/// back, so the exact spelling (spaces included) is load-bearing.
pub mod session_keys {
    pub const TICKET_NUMBER: &str = "Ticket number";
    pub const SOLUTION: &str = "solution";
}

/// Feature-record field names the classifier models were trained on.
pub mod record_fields {
    pub const INCIDENT_NUMBER: &str = "IncidentNumber";
    pub const AFFECTED_END_USER: &str = "AffectedEndUser";
    pub const CI: &str = "CI";
    pub const SUMMARY: &str = "Summary";
}

/// Defaults for the external collaborators (overridable via config).
pub mod defaults {
    /// Hosted realtime prediction endpoint.
    pub const PREDICTION_ENDPOINT: &str =
        "https://realtime.machinelearning.us-east-1.amazonaws.com";

    /// Priority classifier model.
    pub const PRIORITY_MODEL_ID: &str = "ml-cm2S9nNwk3e";

    /// Free-text solution classifier model.
    pub const SOLUTION_MODEL_ID: &str = "ml-ocBazIoXjMv";

    /// Ticket table in the keyed store.
    pub const TICKET_TABLE: &str = "incidentDummy_v2";

    /// Bot-local time zone for invocation logging.
    pub const TIMEZONE: &str = "America/New_York";
}

/// Sentinel label the solution model returns when it has no answer.
pub const NO_SOLUTION_LABEL: &str = "none";
