//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.

use serde::Serialize;

use crate::loader::{Event, Goal};

/// GET /api/v1/goals response
#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    /// All goals in file order, including those beyond the grid size
    pub goals: Vec<Goal>,
    /// How many of them appear in the grid
    pub shown: usize,
    pub total: usize,
}

/// GET /api/v1/timeline response
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub events: Vec<Event>,
    pub total: usize,
}

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy", "degraded" or "unhealthy"
    pub status: String,
    /// Which kind of source the CSV files come from
    pub source: String,
    pub goals: String,
    pub timeline: String,
    pub uptime_seconds: u64,
    pub version: String,
}
