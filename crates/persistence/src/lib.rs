//! Ticket-store access for the helpdesk bot
//!
//! The ticket records live in an external hosted keyed store; this crate
//! owns the read path: the [`TicketStore`] trait, the HTTP client against
//! the store's REST API, and an in-memory implementation used by tests.

pub mod error;
pub mod http;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use http::HttpTicketStore;
pub use memory::InMemoryTicketStore;
pub use store::{TicketRecord, TicketStore};
