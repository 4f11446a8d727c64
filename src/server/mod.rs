//! HTTP surface: router construction, handlers and error mapping.

pub mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::http::HeaderName;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::pipeline::ComicPipeline;

pub use error::{AppError, AppResult};

/// Shared state available to handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ComicPipeline>,
}

impl AppState {
    pub fn new(pipeline: ComicPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Build the application router with tracing and request-id layers.
pub fn router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(handlers::health))
        .route("/generate-comic", post(handlers::generate_comic))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Serve `app` until `shutdown` resolves, letting in-flight requests finish.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
