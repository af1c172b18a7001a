//! Ticket record shape and the store trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// One incident record as the store returns it. Field names on the wire are
/// the store's PascalCase column names; `CI` is the configuration item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    #[serde(rename = "IncidentNumber")]
    pub incident_number: String,
    #[serde(rename = "AffectedEndUser")]
    pub affected_end_user: String,
    #[serde(rename = "CI")]
    pub configuration_item: String,
    #[serde(rename = "Summary")]
    pub summary: String,
}

/// Read access to the keyed ticket store.
///
/// Exact-key lookup only. `Ok(None)` means the result set for the key was
/// empty; transport and server failures come back as `Err`.
#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn fetch(&self, incident_number: &str) -> Result<Option<TicketRecord>, StoreError>;
}
