//! Role group endpoints

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team_member::{Role, TeamMember};

/// Prefix the role endpoints are mounted under
pub const ROLE_PATH: &str = "/api/role";

/// GET /api/role/backend
pub async fn backend_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    debug!("Listing backend team members");

    let members = state.registry.get_by_roles(&Role::BACKEND).await?;
    Ok(Json(members))
}

/// GET /api/role/frontend
pub async fn frontend_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    debug!("Listing frontend team members");

    let members = state.registry.get_by_roles(&Role::FRONTEND).await?;
    Ok(Json(members))
}
