use async_trait::async_trait;
use crate::types::StoredRecord;
use crate::Result;

#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// Store a record, returning the id assigned by the backend
    async fn store_record(&self, record: &StoredRecord) -> Result<i64>;

    /// Get all records tagged with a specific source, newest first
    async fn get_by_source(&self, source: &str) -> Result<Vec<StoredRecord>>;

    /// Get the most recent records across all sources
    async fn list_records(&self, limit: usize) -> Result<Vec<StoredRecord>>;
}
