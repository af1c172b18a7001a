//! Fulfillment logic for the helpdesk bot
//!
//! [`FulfillmentAgent`] routes one dialog-platform invocation to the handler
//! for its intent. Two intents exist: `checkticket` (ticket priority via the
//! keyed store and the priority model) and `checkWIKI` (free-text solution
//! lookup via the solution model). Unknown intents are an error, never a
//! silent fallback.

pub mod agent;
pub mod error;
pub mod severity;

mod ticket;
mod wiki;

pub use agent::FulfillmentAgent;
pub use error::AgentError;
pub use severity::Severity;
