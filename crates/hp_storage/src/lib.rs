use async_trait::async_trait;
use hp_core::{Error, RecordStorage, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub mod backends;

pub use backends::*;

#[async_trait]
pub trait StorageBackend: Send + Sync {
    fn get_error_message() -> &'static str;

    /// Open the backend at `location`; what a location means is up to the backend.
    async fn open(location: &str) -> Result<Self> where Self: Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    #[default]
    SQLite,
    Memory,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::SQLite => f.write_str("sqlite"),
            StorageKind::Memory => f.write_str("memory"),
        }
    }
}

impl FromStr for StorageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(StorageKind::SQLite),
            "memory" => Ok(StorageKind::Memory),
            other => Err(Error::Config(format!(
                "Unknown storage backend: {} (expected sqlite or memory)",
                other
            ))),
        }
    }
}

async fn open_backend<T: StorageBackend + RecordStorage + 'static>(location: &str) -> Result<Arc<dyn RecordStorage>> {
    match T::open(location).await {
        Ok(storage) => Ok(Arc::new(storage)),
        Err(e) => {
            tracing::error!("{}", T::get_error_message());
            Err(e)
        }
    }
}

/// Build the storage client shared by every pipeline run.
pub async fn create_storage(kind: StorageKind, location: &str) -> Result<Arc<dyn RecordStorage>> {
    match kind {
        StorageKind::Memory => open_backend::<InMemoryStorage>(location).await,
        #[cfg(feature = "sqlite")]
        StorageKind::SQLite => open_backend::<SQLiteStorage>(location).await,
        #[cfg(not(feature = "sqlite"))]
        StorageKind::SQLite => Err(Error::Config(
            "hp_storage was built without the sqlite feature".to_string(),
        )),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, StorageBackend, StorageKind};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_kind_from_str() {
        assert_eq!("sqlite".parse::<StorageKind>().unwrap(), StorageKind::SQLite);
        assert_eq!("Memory".parse::<StorageKind>().unwrap(), StorageKind::Memory);
        assert!("qdrant".parse::<StorageKind>().is_err());
    }

    #[tokio::test]
    async fn test_create_memory_storage() {
        let storage = create_storage(StorageKind::Memory, "").await.unwrap();
        assert!(storage.list_records(10).await.unwrap().is_empty());
    }
}
