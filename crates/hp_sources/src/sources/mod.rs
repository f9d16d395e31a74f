pub mod hacker_news;
pub mod fixed;

pub use fixed::StaticSource;
pub use hacker_news::{HackerNewsConfig, HackerNewsSource};
