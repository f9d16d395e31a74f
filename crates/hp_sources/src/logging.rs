use std::collections::VecDeque;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Prefixes every line it emits, e.g. `[web] [story 8863] stored`.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefixes: VecDeque<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            prefixes: VecDeque::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push_back(prefix.into());
        self
    }

    /// A copy of this logger with one more prefix, leaving `self` untouched.
    pub fn child(&self, prefix: impl Into<String>) -> Self {
        self.clone().with_prefix(prefix)
    }

    pub fn line(&self, message: &str) -> String {
        let prefix = self.prefixes.iter().map(|p| format!("{} ", p)).collect::<String>();
        format!("{}{}", prefix, message)
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}", self.line(message));
    }

    pub fn error(&self, message: &str) {
        tracing::error!("{}", self.line(message));
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{}", self.line(message));
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}", self.line(message));
    }
}

/// Install the global fmt subscriber. `RUST_LOG` wins over `default_filter`.
/// Safe to call more than once.
pub fn init_logging(default_filter: &str) -> Logger {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    });
    Logger::new()
}
