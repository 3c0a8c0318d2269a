//! API info endpoint

use axum::extract::State;

use super::state::AppState;

/// GET /api
pub async fn api_info(State(state): State<AppState>) -> String {
    format!("API is running on {} environment", state.environment)
}
