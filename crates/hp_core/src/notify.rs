use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    /// Tell `destination` that a pipeline run finished
    async fn notify(&self, destination: &str) -> Result<()>;
}
