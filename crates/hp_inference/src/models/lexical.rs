use std::fmt;
use hp_core::{Analysis, Result, Sentiment, TextAnalyzer};

pub const SUMMARY_MAX_CHARS: usize = 200;
pub const EMPTY_SUMMARY: &str = "No content available.";

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "success",
    "growth",
    "innovative",
    "breakthrough",
    "improve",
    "win",
    "love",
    "best",
    "launch",
    "positive",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "problem",
    "fail",
    "crisis",
    "risk",
    "decline",
    "loss",
    "worst",
    "bug",
    "breach",
    "layoff",
    "lawsuit",
    "crash",
    "negative",
];

/// Counts how many words of `words` appear anywhere in `text`.
/// Matching is plain substring containment, so "win" also hits "window".
fn score(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| text.contains(*word)).count()
}

/// Summarize `text` and label its tone.
///
/// The summary is the first 200 characters of the text, cut wherever that
/// lands. The label compares positive and negative keyword hits on the
/// lower-cased text; ties (including no hits) are `objective`.
pub fn analyze_text(text: &str) -> (String, Sentiment) {
    if text.is_empty() {
        return (EMPTY_SUMMARY.to_string(), Sentiment::Objective);
    }

    let lowered = text.to_lowercase();
    let positive = score(&lowered, POSITIVE_WORDS);
    let negative = score(&lowered, NEGATIVE_WORDS);

    let sentiment = if positive > negative {
        Sentiment::Enthusiastic
    } else if negative > positive {
        Sentiment::Critical
    } else {
        Sentiment::Objective
    };

    let summary = text.chars().take(SUMMARY_MAX_CHARS).collect();
    (summary, sentiment)
}

#[derive(Clone, Default)]
pub struct LexicalAnalyzer;

impl fmt::Debug for LexicalAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexicalAnalyzer")
            .field("positive_words", &POSITIVE_WORDS.len())
            .field("negative_words", &NEGATIVE_WORDS.len())
            .finish()
    }
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TextAnalyzer for LexicalAnalyzer {
    fn name(&self) -> &str {
        "Lexical"
    }

    async fn analyze(&self, text: &str) -> Result<Analysis> {
        let (summary, sentiment) = analyze_text(text);
        tracing::debug!("🧠 Classified {} chars as {}", text.chars().count(), sentiment);
        Ok(Analysis { summary, sentiment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_text_leans_positive() {
        let (summary, sentiment) = analyze_text("great growth, no problem");
        assert_eq!(score("great growth, no problem", POSITIVE_WORDS), 2);
        assert_eq!(score("great growth, no problem", NEGATIVE_WORDS), 1);
        assert_eq!(sentiment, Sentiment::Enthusiastic);
        assert_eq!(summary, "great growth, no problem");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(
            analyze_text(""),
            (EMPTY_SUMMARY.to_string(), Sentiment::Objective)
        );
    }

    #[test]
    fn test_negative_text() {
        let (_, sentiment) = analyze_text("Data breach leads to lawsuit");
        assert_eq!(sentiment, Sentiment::Critical);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let (_, sentiment) = analyze_text("GREAT news");
        assert_eq!(sentiment, Sentiment::Enthusiastic);
    }

    #[test]
    fn test_substring_matching() {
        // "window" contains "win"
        let (_, sentiment) = analyze_text("A new window manager");
        assert_eq!(sentiment, Sentiment::Enthusiastic);
    }

    #[test]
    fn test_tie_is_objective() {
        let (_, sentiment) = analyze_text("good but bad");
        assert_eq!(sentiment, Sentiment::Objective);

        let (_, sentiment) = analyze_text("Show HN: a Rust compiler");
        assert_eq!(sentiment, Sentiment::Objective);
    }

    #[test]
    fn test_summary_is_capped() {
        let long = "a".repeat(450);
        let (summary, _) = analyze_text(&long);
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS);
        assert!(long.starts_with(&summary));

        let short = "Short text stays whole.";
        let (summary, _) = analyze_text(short);
        assert_eq!(summary, short);
    }

    #[test]
    fn test_summary_counts_characters_not_bytes() {
        let text = "é".repeat(250);
        let (summary, _) = analyze_text(&text);
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS);
        assert_eq!(summary.len(), SUMMARY_MAX_CHARS * 2);
    }

    #[test]
    fn test_analyze_text_is_deterministic() {
        let text = "Startup announces breakthrough after a year of decline";
        assert_eq!(analyze_text(text), analyze_text(text));
    }

    #[tokio::test]
    async fn test_lexical_analyzer() {
        let analyzer = LexicalAnalyzer::new();
        assert_eq!(analyzer.name(), "Lexical");

        let analysis = analyzer.analyze("Excellent launch").await.unwrap();
        assert_eq!(analysis.sentiment, Sentiment::Enthusiastic);
        assert_eq!(analysis.summary, "Excellent launch");
    }
}
