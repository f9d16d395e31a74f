use std::sync::Arc;
use hp_core::{
    time, ClassifiedItem, ItemId, ItemSource, Notifier, PipelineError, PipelineReport,
    PipelineRequest, RecordStorage, Result, StoredRecord, TextAnalyzer,
};
use hp_inference::LexicalAnalyzer;
use crate::logging::Logger;
use crate::notify::LogNotifier;
use crate::sources::{HackerNewsConfig, HackerNewsSource};

pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Runs fetch → analyze → persist → notify for one request.
///
/// Every step is a single sequential call. Only a failed ranking fetch ends a
/// run early; item and notification failures end up in the report's
/// `errors` and the run carries on.
pub struct PipelineManager {
    source: Arc<dyn ItemSource>,
    analyzer: Arc<dyn TextAnalyzer>,
    storage: Arc<dyn RecordStorage>,
    notifier: Arc<dyn Notifier>,
    batch_size: usize,
}

impl PipelineManager {
    pub fn new(
        source: Arc<dyn ItemSource>,
        analyzer: Arc<dyn TextAnalyzer>,
        storage: Arc<dyn RecordStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            source,
            analyzer,
            storage,
            notifier,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Hacker News upstream, lexical analyzer and log notifier.
    pub fn hacker_news(storage: Arc<dyn RecordStorage>, config: HackerNewsConfig) -> Result<Self> {
        let source = HackerNewsSource::new(config)?;
        Ok(Self::new(
            Arc::new(source),
            Arc::new(LexicalAnalyzer::new()),
            storage,
            Arc::new(LogNotifier::new()),
        ))
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn storage(&self) -> &Arc<dyn RecordStorage> {
        &self.storage
    }

    pub fn source_name(&self) -> &str {
        self.source.source()
    }

    async fn fetch_batch(&self) -> std::result::Result<Vec<ItemId>, PipelineError> {
        let mut ids = self.source
            .top_item_ids(self.batch_size)
            .await
            .map_err(PipelineError::BatchFetch)?;
        ids.truncate(self.batch_size);
        Ok(ids)
    }

    async fn process_item(
        &self,
        id: &ItemId,
        source_tag: &str,
        logger: &Logger,
    ) -> std::result::Result<ClassifiedItem, PipelineError> {
        let item = self.source
            .fetch_item(id)
            .await
            .map_err(|cause| PipelineError::ItemFetch { id: id.clone(), cause })?;
        logger.debug(&format!("📰 Fetched: {}", item.title));

        let content = item.content().to_string();
        let analysis = self.analyzer
            .analyze(&content)
            .await
            .map_err(|cause| PipelineError::Analysis { id: id.clone(), cause })?;
        logger.debug(&format!("🧠 Sentiment: {}", analysis.sentiment));

        let record = StoredRecord {
            id: None,
            title: item.title.clone(),
            content,
            analysis: analysis.summary.clone(),
            sentiment: analysis.sentiment,
            source: source_tag.to_string(),
            timestamp: time::timestamp(),
        };
        let row_id = self.storage
            .store_record(&record)
            .await
            .map_err(|cause| PipelineError::Persistence { id: id.clone(), cause })?;
        logger.debug(&format!("💾 Stored as row {}", row_id));

        Ok(ClassifiedItem {
            original: item.title,
            analysis: analysis.summary,
            sentiment: analysis.sentiment,
            stored: true,
            timestamp: time::timestamp(),
        })
    }

    async fn send_notification(&self, destination: &str) -> std::result::Result<(), PipelineError> {
        self.notifier
            .notify(destination)
            .await
            .map_err(PipelineError::Notification)
    }

    pub async fn run(&self, request: &PipelineRequest) -> PipelineReport {
        let logger = Logger::new().with_prefix(format!("[{}]", request.source));
        logger.info(&format!("🚀 Pipeline started against {}", self.source.source()));

        let ids = match self.fetch_batch().await {
            Ok(ids) => ids,
            Err(e) => {
                logger.error(&format!("❌ {}", e));
                return PipelineReport {
                    items: Vec::new(),
                    notification_sent: false,
                    processed_at: time::timestamp(),
                    errors: vec![e.to_string()],
                };
            }
        };
        logger.info(&format!("📋 Processing {} stories", ids.len()));

        let mut items = Vec::with_capacity(ids.len());
        let mut errors = Vec::new();

        for id in &ids {
            let item_logger = logger.child(format!("[story {}]", id));
            match self.process_item(id, &request.source, &item_logger).await {
                Ok(item) => {
                    item_logger.info(&format!("✅ {} ({})", item.original, item.sentiment));
                    items.push(item);
                }
                Err(e) => {
                    item_logger.warn(&format!("⚠️ {}", e));
                    errors.push(e.to_string());
                }
            }
        }

        let notification_sent = match self.send_notification(&request.email).await {
            Ok(()) => true,
            Err(e) => {
                logger.warn(&format!("⚠️ {}", e));
                errors.push(e.to_string());
                false
            }
        };

        logger.info(&format!(
            "✨ Pipeline finished: {} stored, {} errors",
            items.len(),
            errors.len()
        ));

        PipelineReport {
            items,
            notification_sent,
            processed_at: time::timestamp(),
            errors,
        }
    }
}
