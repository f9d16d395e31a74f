pub mod error;
pub mod models;
pub mod notify;
pub mod source;
pub mod storage;
pub mod time;
pub mod types;

pub use error::{Error, PipelineError};
pub type Result<T> = std::result::Result<T, Error>;

pub use models::TextAnalyzer;
pub use notify::Notifier;
pub use source::ItemSource;
pub use storage::RecordStorage;
pub use types::{
    Analysis, ClassifiedItem, Item, ItemId, PipelineReport, PipelineRequest, Sentiment,
    StoredRecord,
};
