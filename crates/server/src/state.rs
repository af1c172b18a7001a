//! Shared application state

use std::sync::Arc;

use helpdesk_bot_agent::FulfillmentAgent;

#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<FulfillmentAgent>,
    /// Bot-local time zone, parsed once at startup. Threaded as a value so
    /// concurrent invocations never race on process-global TZ state.
    pub timezone: chrono_tz::Tz,
}
