use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ReceiptError, Result};
use crate::models::ScoreRecord;

/// In-memory store of processed receipts.
///
/// Clones share the same map. Records are never updated or removed.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    records: Arc<RwLock<HashMap<Uuid, ScoreRecord>>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `points` under a freshly generated id and returns the new record
    pub async fn put(&self, points: u64) -> ScoreRecord {
        let mut records = self.records.write().await;

        let mut record = ScoreRecord::new(points);
        while records.contains_key(&record.id) {
            record = ScoreRecord::new(points);
        }

        records.insert(record.id, record.clone());
        record
    }

    pub async fn get(&self, id: Uuid) -> Result<ScoreRecord> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ReceiptError::NotFound)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
