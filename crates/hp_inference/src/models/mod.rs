pub mod lexical;

pub use lexical::LexicalAnalyzer;
