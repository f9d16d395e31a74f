use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::root))
        .route("/pipeline", post(handlers::run_pipeline))
        .route("/records", get(handlers::list_records))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> std::io::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

pub mod prelude {
    pub use hp_core::{PipelineReport, PipelineRequest, Result, Error};
    pub use crate::AppState;
}
