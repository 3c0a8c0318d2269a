//! Team member CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse};
use crate::domain::team_member::{Role, TeamMember, TeamMemberId};
use crate::domain::DomainError;

/// Base path of the team member resource
pub const TEAM_MEMBERS_PATH: &str = "/team-members";

/// Routes for the team member resource
pub fn create_team_members_router() -> Router<AppState> {
    Router::new()
        .route(
            TEAM_MEMBERS_PATH,
            get(list_team_members)
                .post(create_team_member)
                .put(update_team_member),
        )
        .route(
            "/team-members/{id}",
            get(get_team_member).delete(delete_team_member),
        )
}

/// Body of an update request; the id addresses the stored record
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeamMemberRequest {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub grade: i32,
}

impl UpdateTeamMemberRequest {
    fn into_member(self) -> Result<TeamMember, DomainError> {
        Ok(TeamMember::new(
            TeamMemberId::existing(self.id),
            self.name,
            self.role,
            self.grade,
        )?)
    }
}

fn parse_id(id: &str) -> Result<TeamMemberId, ApiError> {
    TeamMemberId::parse(id).map_err(|e| ApiError::from(DomainError::from(e)))
}

fn accepted(message: String) -> (StatusCode, Json<MessageResponse>) {
    info!("{}", message);
    (StatusCode::ACCEPTED, Json(MessageResponse::new(message)))
}

/// GET /team-members
pub async fn list_team_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    debug!("Listing team members");

    let members = state.registry.get_all().await?;
    Ok(Json(members))
}

/// GET /team-members/{id}
pub async fn get_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamMember>, ApiError> {
    let id = parse_id(&id)?;
    let member = state.registry.get_by_id(&id).await?;

    Ok(Json(member))
}

/// POST /team-members
pub async fn create_team_member(
    State(state): State<AppState>,
    Json(member): Json<TeamMember>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = state.registry.add(member).await?;

    Ok(accepted(format!(
        "Successfully created team member with id '{}'.",
        id
    )))
}

/// PUT /team-members
pub async fn update_team_member(
    State(state): State<AppState>,
    Json(request): Json<UpdateTeamMemberRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.registry.update(request.into_member()?).await?;

    Ok(accepted("Successfully updated team member.".to_string()))
}

/// DELETE /team-members/{id}
pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = parse_id(&id)?;
    state.registry.remove(&id).await?;

    Ok(accepted("Successfully deleted team member.".to_string()))
}
