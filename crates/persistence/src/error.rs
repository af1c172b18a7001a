//! Ticket-store error types

use thiserror::Error;

/// Failures talking to the keyed store. A true miss is NOT an error; it is
/// `Ok(None)` from [`crate::TicketStore::fetch`], so callers never confuse
/// "the ticket does not exist" with "the store is down".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ticket store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("ticket store returned unexpected status {status} for table {table}")]
    UnexpectedStatus {
        status: u16,
        table: String,
    },
}
