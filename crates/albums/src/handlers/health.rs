//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (albums table must be active)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;
use crate::storage::TableStatus;

/// Readiness probe body.
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub ready: bool,
    pub table: String,
    /// `None` when the table does not exist.
    pub status: Option<TableStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not touch the store.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Describes the albums table. Returns 200 when it is active, 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    let (status, error) = match state.store.table_status(&state.table_name).await {
        Ok(status) => (status, None),
        Err(e) => {
            tracing::warn!(error = %e, table = %state.table_name, "Readiness check failed");
            (None, Some(e.to_string()))
        }
    };

    let ready = status.is_some_and(|s| s.is_active());
    let body = Json(Readiness {
        ready,
        table: state.table_name.clone(),
        status,
        error,
    });

    if ready {
        (StatusCode::OK, body).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, body).into_response()
    }
}
