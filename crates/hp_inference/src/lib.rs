pub mod models;

pub use models::lexical::{analyze_text, LexicalAnalyzer};

pub mod prelude {
    pub use super::models::lexical::{analyze_text, LexicalAnalyzer};
    pub use hp_core::{Analysis, Error, Result, Sentiment, TextAnalyzer};
}
