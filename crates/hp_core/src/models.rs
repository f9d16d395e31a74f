use async_trait::async_trait;
use crate::types::Analysis;
use crate::Result;

#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    fn name(&self) -> &str;

    /// Summarize a piece of text and label its tone
    async fn analyze(&self, text: &str) -> Result<Analysis>;
}
