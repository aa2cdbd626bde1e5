//! Page Route
//!
//! - GET / - The rendered board

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;

/// GET /
///
/// Loads both CSV files and renders the full page. A section whose file
/// could not be loaded is left empty (or shows a placeholder when enabled);
/// the page itself is always served.
pub async fn board_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let (doc, report) = state.board.render_page().await;

    tracing::debug!(
        goals = report.goals.count(),
        events = report.timeline.count(),
        complete = report.is_complete(),
        "Rendered board page"
    );

    Html(doc.to_html())
}
