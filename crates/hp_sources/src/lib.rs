pub mod sources;
pub mod manager;
pub mod notify;
pub mod logging;

pub use manager::{PipelineManager, DEFAULT_BATCH_SIZE};
pub use notify::LogNotifier;
pub use sources::{HackerNewsConfig, HackerNewsSource, StaticSource};

pub mod prelude {
    pub use super::sources::{HackerNewsConfig, HackerNewsSource, StaticSource};
    pub use super::PipelineManager;
    pub use hp_core::{Error, ItemSource, PipelineReport, PipelineRequest, Result};
}
