use async_trait::async_trait;
use hp_core::{Notifier, Result};

/// Writes the notification to the log instead of delivering it anywhere.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "Log"
    }

    async fn notify(&self, destination: &str) -> Result<()> {
        tracing::info!("📧 Notification sent to {}", destination);
        Ok(())
    }
}
