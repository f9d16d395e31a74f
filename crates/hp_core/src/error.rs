use thiserror::Error;

use crate::types::ItemId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single pipeline step.
///
/// Only [`PipelineError::BatchFetch`] ends a run early; every other variant
/// is recorded in the report and the run carries on.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to fetch top stories: {0}")]
    BatchFetch(#[source] Error),

    #[error("Story {id} failed: {cause}")]
    ItemFetch {
        id: ItemId,
        #[source]
        cause: Error,
    },

    #[error("Story {id} failed: {cause}")]
    Analysis {
        id: ItemId,
        #[source]
        cause: Error,
    },

    #[error("Story {id} failed: {cause}")]
    Persistence {
        id: ItemId,
        #[source]
        cause: Error,
    },

    #[error("{0}")]
    Notification(#[source] Error),
}

impl PipelineError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, PipelineError::BatchFetch(_))
    }

    /// The item this error belongs to, if any.
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            PipelineError::ItemFetch { id, .. }
            | PipelineError::Analysis { id, .. }
            | PipelineError::Persistence { id, .. } => Some(id),
            PipelineError::BatchFetch(_) | PipelineError::Notification(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_errors_share_story_prefix() {
        let fetch = PipelineError::ItemFetch {
            id: ItemId::Number(42),
            cause: Error::Source("item not found".to_string()),
        };
        let store = PipelineError::Persistence {
            id: ItemId::Text("abc".to_string()),
            cause: Error::Storage("disk full".to_string()),
        };

        assert_eq!(fetch.to_string(), "Story 42 failed: Source error: item not found");
        assert_eq!(store.to_string(), "Story abc failed: Storage error: disk full");
        assert!(!fetch.is_fatal());
        assert_eq!(store.item_id(), Some(&ItemId::Text("abc".to_string())));
    }

    #[test]
    fn test_batch_fetch_is_fatal() {
        let err = PipelineError::BatchFetch(Error::Source("connection refused".to_string()));
        assert!(err.is_fatal());
        assert!(err.item_id().is_none());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_notification_message_is_cause() {
        let err = PipelineError::Notification(Error::Notification("smtp down".to_string()));
        assert_eq!(err.to_string(), "Notification error: smtp down");
        assert!(!err.is_fatal());
    }
}
