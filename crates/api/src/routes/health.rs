//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Name reported by `/health`, so probes can tell which service answered.
pub const SERVICE_NAME: &str = "famtree-api";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    /// `"ok"` when the member store answers, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn new(db_healthy: bool) -> Self {
        Self {
            service: SERVICE_NAME,
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
///
/// Always 200. Database reachability is reported in the body.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match famtree_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Member store unreachable");
            false
        }
    };
    Json(HealthResponse::new(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
