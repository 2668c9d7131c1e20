use anyhow::Context;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use trading::{ErrorKind, SignalError, SignalHandler};

use crate::config::ReloadableConfig;

/// Shared state for the signal routes.
#[derive(Clone)]
pub struct ApiState {
    handler: Arc<dyn SignalHandler>,
    reloader: Option<Arc<dyn ReloadableConfig>>,
}

impl ApiState {
    pub fn new(handler: Arc<dyn SignalHandler>) -> Self {
        Self {
            handler,
            reloader: None,
        }
    }

    /// Enables `POST /api/config/reload` backed by `reloader`.
    pub fn with_reloader(mut self, reloader: Arc<dyn ReloadableConfig>) -> Self {
        self.reloader = Some(reloader);
        self
    }
}

/// Builds the signal API router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/signal", post(handle_signal))
        .route("/api/config/reload", post(reload_config))
        .with_state(state)
}

/// Serves the signal API until the listener fails.
pub async fn run_api_server(state: ApiState, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind signal API on {}", addr))?;
    info!("Signal API listening on {}", addr);

    axum::serve(listener, router(state))
        .await
        .context("Signal API server stopped")
}

#[derive(Debug, Deserialize)]
struct SignalQuery {
    signal: i32,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    kind: ErrorKind,
    msg: String,
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handle_signal(
    State(state): State<ApiState>,
    query: Result<Query<SignalQuery>, QueryRejection>,
) -> Response {
    let signal = match query {
        Ok(Query(query)) => query.signal,
        Err(rejection) => {
            debug!("Rejected signal request: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(json!({"status": "ERROR", "msg": rejection.body_text()})),
            )
                .into_response();
        }
    };
    debug!("Received signal: {}", signal);

    let handler = Arc::clone(&state.handler);
    match tokio::task::spawn_blocking(move || handler.handle_signal(signal)).await {
        Ok(Ok(())) => {
            debug!("Finished handling signal: {}", signal);
            Json(json!({"status": "OK", "signal": signal})).into_response()
        }
        Ok(Err(e)) => signal_error_response(&e),
        Err(e) => {
            error!("Signal {} handler did not complete: {}", signal, e);
            internal_error()
        }
    }
}

async fn reload_config(State(state): State<ApiState>) -> Response {
    let Some(reloader) = state.reloader.clone() else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "ERROR", "msg": "Configuration is not reloadable"})),
        )
            .into_response();
    };

    match tokio::task::spawn_blocking(move || reloader.reload()).await {
        Ok(Ok(signals)) => Json(json!({"status": "OK", "signals": signals})).into_response(),
        Ok(Err(e)) => {
            error!("Configuration reload failed: {}", e);
            internal_error()
        }
        Err(e) => {
            error!("Configuration reload did not complete: {}", e);
            internal_error()
        }
    }
}

fn signal_error_response(err: &SignalError) -> Response {
    let status = match err.kind() {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = ErrorBody {
        status: "ERROR",
        kind: err.kind(),
        msg: err.public_message(),
    };
    (status, Json(body)).into_response()
}

fn internal_error() -> Response {
    let body = ErrorBody {
        status: "ERROR",
        kind: ErrorKind::Internal,
        msg: "Internal Error".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
