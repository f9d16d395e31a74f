use async_trait::async_trait;
use hp_core::{Error, Item, ItemId, ItemSource, Result};
use std::collections::HashMap;

/// Serves a fixed ranking from memory.
///
/// Ids listed in the ranking but missing from the item set fail the same
/// way a deleted upstream story does.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    ranking: Option<Vec<ItemId>>,
    items: HashMap<ItemId, Item>,
}

impl StaticSource {
    /// Ranking follows the order of `items`.
    pub fn new(items: Vec<Item>) -> Self {
        let ranking = items.iter().map(|item| item.id.clone()).collect();
        Self {
            name: "Static".to_string(),
            ranking: Some(ranking),
            items: items.into_iter().map(|item| (item.id.clone(), item)).collect(),
        }
    }

    /// A source whose ranking can never be fetched.
    pub fn unavailable() -> Self {
        Self {
            name: "Static".to_string(),
            ranking: None,
            items: HashMap::new(),
        }
    }

    pub fn with_ranking(mut self, ranking: Vec<ItemId>) -> Self {
        self.ranking = Some(ranking);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl ItemSource for StaticSource {
    fn source(&self) -> &str {
        &self.name
    }

    async fn top_item_ids(&self, limit: usize) -> Result<Vec<ItemId>> {
        let ranking = self.ranking
            .as_ref()
            .ok_or_else(|| Error::Source(format!("{} ranking is unavailable", self.name)))?;
        Ok(ranking.iter().take(limit).cloned().collect())
    }

    async fn fetch_item(&self, id: &ItemId) -> Result<Item> {
        self.items
            .get(id)
            .cloned()
            .ok_or_else(|| Error::Source(format!("item {} not found", id)))
    }
}
