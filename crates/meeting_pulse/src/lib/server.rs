//! The inbound webhook surface.
//!
//! One endpoint receives transcripts, one answers liveness probes. The
//! webhook handler takes the raw body bytes rather than a JSON extractor so
//! that sanitation runs before JSON parsing.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    error::Error, llm::summarizer::Summarizer, notify::Notifier, processor::TranscriptProcessor,
    tracker::IssueTracker,
};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = if self.is_client_error() {
            (StatusCode::BAD_REQUEST, self.to_string())
        } else {
            // details stay in the logs
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Builds the application router around a shared processor.
pub fn app<S, N, T>(processor: Arc<TranscriptProcessor<S, N, T>>) -> Router
where
    S: Summarizer + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    T: IssueTracker + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(health_check))
        .route("/webhook", post(handle_webhook::<S, N, T>))
        .layer(TraceLayer::new_for_http())
        .with_state(processor)
}

async fn health_check() -> &'static str {
    "meeting-pulse webhook is live"
}

async fn handle_webhook<S, N, T>(
    State(processor): State<Arc<TranscriptProcessor<S, N, T>>>,
    body: Bytes,
) -> Result<impl IntoResponse, Error>
where
    S: Summarizer + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    T: IssueTracker + Send + Sync + 'static,
{
    let report = match processor.run(&body).await {
        Ok(report) => report,
        Err(e) if e.is_client_error() => {
            tracing::warn!(error = %e, "Rejected webhook payload");
            return Err(e);
        }
        Err(e) => {
            tracing::error!(error = %e, "Webhook processing failed");
            return Err(e);
        }
    };

    Ok(Json(serde_json::json!({
        "status": "success",
        "tickets_created": report.created.len(),
    })))
}

/// Binds the listener and serves the router until shutdown.
pub async fn serve<S, N, T>(
    port: u16,
    processor: Arc<TranscriptProcessor<S, N, T>>,
) -> anyhow::Result<()>
where
    S: Summarizer + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    T: IssueTracker + Send + Sync + 'static,
{
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Webhook server listening");

    axum::serve(listener, app(processor)).await?;

    Ok(())
}
