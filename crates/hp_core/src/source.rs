use async_trait::async_trait;
use crate::types::{Item, ItemId};
use crate::Result;

#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Returns the name of the upstream source
    fn source(&self) -> &str;

    /// Returns at most `limit` identifiers from the top of the upstream ranking
    async fn top_item_ids(&self, limit: usize) -> Result<Vec<ItemId>>;

    /// Fetches the detail of a single item
    async fn fetch_item(&self, id: &ItemId) -> Result<Item>;
}
