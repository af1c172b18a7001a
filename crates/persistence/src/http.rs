//! HTTP client for the hosted keyed store

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::StoreError;
use crate::store::{TicketRecord, TicketStore};

/// Result-set envelope the store's query API returns. An empty `items` list
/// is how the store reports a key with no record; it never returns null.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    items: Vec<TicketRecord>,
}

/// Ticket store backed by the hosted keyed store's REST API.
pub struct HttpTicketStore {
    client: reqwest::Client,
    base_url: String,
    table: String,
}

impl HttpTicketStore {
    pub fn new(base_url: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            table: table.into(),
        }
    }

    fn item_url(&self, key: &str) -> String {
        format!(
            "{}/tables/{}/items/{}",
            self.base_url.trim_end_matches('/'),
            self.table,
            key
        )
    }
}

#[async_trait]
impl TicketStore for HttpTicketStore {
    async fn fetch(&self, incident_number: &str) -> Result<Option<TicketRecord>, StoreError> {
        let url = self.item_url(incident_number);
        tracing::debug!(%url, table = %self.table, "querying ticket store");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                table: self.table.clone(),
            });
        }

        let result: QueryResponse = response.json().await?;
        tracing::debug!(items = result.items.len(), "ticket store query returned");
        Ok(result.items.into_iter().next())
    }
}
