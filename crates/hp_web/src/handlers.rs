use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use hp_core::{PipelineReport, PipelineRequest, RecordStorage, StoredRecord};
use serde::Deserialize;
use serde_json::{json, Value};
use crate::AppState;

pub const DEFAULT_RECORD_LIMIT: usize = 50;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Pipeline API is running" }))
}

/// Always answers 200; partial failure is reported in the body.
pub async fn run_pipeline(
    State(state): State<AppState>,
    Json(request): Json<PipelineRequest>,
) -> Json<PipelineReport> {
    Json(state.pipeline.run(&request).await)
}

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    pub source: Option<String>,
    pub limit: Option<usize>,
}

pub async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<Vec<StoredRecord>>, (StatusCode, Json<Value>)> {
    let limit = query.limit.unwrap_or(DEFAULT_RECORD_LIMIT);
    let storage = state.pipeline.storage();

    let records = match query.source.as_deref() {
        Some(source) => storage.get_by_source(source).await.map(|mut records| {
            records.truncate(limit);
            records
        }),
        None => storage.list_records(limit).await,
    };

    records.map(Json).map_err(|e| {
        tracing::error!("❌ Failed to list records: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
    })
}
