//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Checks that both CSV files can currently be loaded.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (goals, timeline) = tokio::join!(state.board.load_goals(), state.board.load_timeline());

    let goals_ok = goals.is_ok();
    let timeline_ok = timeline.is_ok();

    let overall_status = if goals_ok && timeline_ok {
        "healthy"
    } else if goals_ok || timeline_ok {
        "degraded"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: overall_status.to_string(),
        source: state.board.source_kind().to_string(),
        goals: status_label(goals_ok).to_string(),
        timeline: status_label(timeline_ok).to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn status_label(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "error"
    }
}
