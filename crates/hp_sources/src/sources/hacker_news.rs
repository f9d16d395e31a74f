use async_trait::async_trait;
use hp_core::{Error, Item, ItemId, ItemSource, Result};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct HackerNewsConfig {
    pub base_url: Url,
    /// Applies to every request on its own; there is no retry.
    pub timeout: Duration,
}

impl HackerNewsConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Url::join drops the last path segment unless it ends in a slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::Config(format!("Invalid upstream URL {}: {}", base_url, e)))?;

        Ok(Self { base_url, timeout })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Source(format!("Failed to build URL for {}: {}", path, e)))
    }
}

impl Default for HackerNewsConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Shape of `item/<id>.json`. Everything is optional upstream.
#[derive(Debug, Deserialize)]
struct ItemDetail {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

pub struct HackerNewsSource {
    client: Client,
    config: HackerNewsConfig,
}

impl HackerNewsSource {
    pub fn new(config: HackerNewsConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HackerNewsConfig {
        &self.config
    }
}

impl fmt::Debug for HackerNewsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HackerNewsSource")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.config.base_url.as_str())
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

#[async_trait]
impl ItemSource for HackerNewsSource {
    fn source(&self) -> &str {
        "Hacker News"
    }

    async fn top_item_ids(&self, limit: usize) -> Result<Vec<ItemId>> {
        let url = self.config.endpoint("topstories.json")?;
        let mut ids = self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ItemId>>()
            .await?;

        ids.truncate(limit);
        Ok(ids)
    }

    async fn fetch_item(&self, id: &ItemId) -> Result<Item> {
        let url = self.config.endpoint(&format!("item/{}.json", id))?;
        let detail = self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Option<ItemDetail>>()
            .await?
            .ok_or_else(|| Error::Source(format!("item {} not found", id)))?;

        Ok(Item {
            id: id.clone(),
            title: detail.title.unwrap_or_default(),
            text: detail.text,
        })
    }
}
