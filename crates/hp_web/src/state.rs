use std::sync::Arc;
use hp_sources::PipelineManager;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PipelineManager>,
}

impl AppState {
    pub fn new(pipeline: PipelineManager) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}
