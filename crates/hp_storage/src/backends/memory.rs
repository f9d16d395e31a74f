use async_trait::async_trait;
use hp_core::{RecordStorage, Result, StoredRecord};
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::StorageBackend;

#[derive(Debug)]
pub struct MemoryStore {
    records: Vec<StoredRecord>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn store_record(&mut self, record: &StoredRecord) -> i64 {
        let id = self.next_id;
        self.next_id += 1;

        let mut record = record.clone();
        record.id = Some(id);
        self.records.push(record);
        id
    }

    pub fn get_by_source(&self, source: &str) -> Vec<StoredRecord> {
        self.records.iter()
            .rev()
            .filter(|record| record.source == source)
            .cloned()
            .collect()
    }

    pub fn list_records(&self, limit: usize) -> Vec<StoredRecord> {
        self.records.iter().rev().take(limit).cloned().collect()
    }
}

/// Keeps records for the lifetime of the process. Nothing survives a restart.
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorage {
    fn get_error_message() -> &'static str {
        "Memory storage should be available"
    }

    async fn open(_location: &str) -> Result<Self> {
        Ok(Self::new())
    }
}

#[async_trait]
impl RecordStorage for InMemoryStorage {
    async fn store_record(&self, record: &StoredRecord) -> Result<i64> {
        let mut store = self.store.write().await;
        Ok(store.store_record(record))
    }

    async fn get_by_source(&self, source: &str) -> Result<Vec<StoredRecord>> {
        let store = self.store.read().await;
        Ok(store.get_by_source(source))
    }

    async fn list_records(&self, limit: usize) -> Result<Vec<StoredRecord>> {
        let store = self.store.read().await;
        Ok(store.list_records(limit))
    }
}
