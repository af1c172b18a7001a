//! In-memory ticket store
//!
//! Keeps the same `Ok(None)`-on-miss contract as the HTTP store so handler
//! tests exercise the real not-found path.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::StoreError;
use crate::store::{TicketRecord, TicketStore};

#[derive(Default)]
pub struct InMemoryTicketStore {
    records: RwLock<HashMap<String, TicketRecord>>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: TicketRecord) {
        self.records
            .write()
            .insert(record.incident_number.clone(), record);
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn fetch(&self, incident_number: &str) -> Result<Option<TicketRecord>, StoreError> {
        Ok(self.records.read().get(incident_number).cloned())
    }
}
