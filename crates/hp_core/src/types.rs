use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Upstream identifier of a story. Hacker News hands out numbers, other
/// sources may use strings, so both are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub text: Option<String>,
}

impl Item {
    pub fn new(id: u64, title: impl Into<String>, text: Option<String>) -> Self {
        Self {
            id: ItemId::Number(id),
            title: title.into(),
            text,
        }
    }

    /// Text to classify and store: the body, or the title when the body is
    /// missing or empty.
    pub fn content(&self) -> &str {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => &self.title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Enthusiastic,
    Critical,
    Objective,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Enthusiastic => "enthusiastic",
            Sentiment::Critical => "critical",
            Sentiment::Objective => "objective",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enthusiastic" => Ok(Sentiment::Enthusiastic),
            "critical" => Ok(Sentiment::Critical),
            "objective" => Ok(Sentiment::Objective),
            other => Err(Error::Inference(format!("Unknown sentiment label: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub summary: String,
    pub sentiment: Sentiment,
}

/// One entry of a [`PipelineReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    pub original: String,
    pub analysis: String,
    pub sentiment: Sentiment,
    pub stored: bool,
    pub timestamp: String,
}

/// A row of the `stories` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub analysis: String,
    pub sentiment: Sentiment,
    pub source: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub items: Vec<ClassifiedItem>,
    pub notification_sent: bool,
    pub processed_at: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRequest {
    pub email: String,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_accepts_numbers_and_strings() {
        let ids: Vec<ItemId> = serde_json::from_str(r#"[8863, "abc"]"#).unwrap();
        assert_eq!(ids, vec![ItemId::Number(8863), ItemId::Text("abc".to_string())]);
        assert_eq!(ids[0].to_string(), "8863");
        assert_eq!(ids[1].to_string(), "abc");
    }

    #[test]
    fn test_content_falls_back_to_title() {
        let item = Item::new(1, "Only a title", None);
        assert_eq!(item.content(), "Only a title");

        let item = Item::new(2, "Title", Some(String::new()));
        assert_eq!(item.content(), "Title");

        let item = Item::new(3, "Title", Some("Body".to_string()));
        assert_eq!(item.content(), "Body");
    }

    #[test]
    fn test_report_field_names() {
        let report = PipelineReport {
            items: vec![ClassifiedItem {
                original: "Title".to_string(),
                analysis: "Body".to_string(),
                sentiment: Sentiment::Critical,
                stored: true,
                timestamp: "2024-01-01T00:00:00.000000Z".to_string(),
            }],
            notification_sent: true,
            processed_at: "2024-01-01T00:00:01.000000Z".to_string(),
            errors: vec![],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["notificationSent"], true);
        assert_eq!(json["processedAt"], "2024-01-01T00:00:01.000000Z");
        assert_eq!(json["items"][0]["sentiment"], "critical");
        assert_eq!(json["items"][0]["stored"], true);
        assert!(json["errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_sentiment_round_trips_through_str() {
        for label in [Sentiment::Enthusiastic, Sentiment::Critical, Sentiment::Objective] {
            assert_eq!(label.as_str().parse::<Sentiment>().unwrap(), label);
        }
        assert!("positive".parse::<Sentiment>().is_err());
    }
}
