//! Data Routes
//!
//! Parsed CSV contents as JSON.
//!
//! - GET /api/v1/goals - All goals
//! - GET /api/v1/timeline - All timeline events

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{GoalsResponse, TimelineResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/goals
pub async fn list_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<GoalsResponse>> {
    let goals = state.board.load_goals().await?;
    let total = goals.len();
    let shown = total.min(state.board.config().max_goals);

    Ok(Json(GoalsResponse {
        goals,
        shown,
        total,
    }))
}

/// GET /api/v1/timeline
pub async fn list_timeline(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TimelineResponse>> {
    let events = state.board.load_timeline().await?;
    let total = events.len();

    Ok(Json(TimelineResponse { events, total }))
}
