use axum::{
    http::{StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use super::middleware::{
    correlation_id_middleware, correlation_logging_middleware, exception_handler_layer,
    request_decoration_middleware, timing_middleware,
};
use super::roles::{self, ROLE_PATH};
use super::state::AppState;
use super::team_members::create_team_members_router;
use super::{health, info};
use crate::config::PipelineMode;

/// Create the router for the selected middleware pipeline
pub fn create_router(state: AppState, mode: PipelineMode) -> Router {
    match mode {
        PipelineMode::Main => create_main_router(state),
        PipelineMode::Branched => create_branched_router(state),
    }
}

/// Linear pipeline serving the full API
///
/// Layers run outermost first: decoration, request id and tracing, panic
/// handling, timing, then the correlation pair.
pub fn create_main_router(state: AppState) -> Router {
    Router::new()
        .merge(create_team_members_router())
        .nest(ROLE_PATH, create_role_router())
        .route("/api", get(info::api_info))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(middleware::from_fn(correlation_logging_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            correlation_id_middleware,
        ))
        .layer(middleware::from_fn(timing_middleware))
        .layer(exception_handler_layer())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(middleware::from_fn(request_decoration_middleware))
        .with_state(state)
}

/// Conditional pipeline: only the role branch is mapped, panic handling
/// covers the backend endpoint alone, and everything else hits the fallback
pub fn create_branched_router(state: AppState) -> Router {
    let role_branch = Router::new()
        .route(
            "/backend",
            get(roles::backend_members).layer(exception_handler_layer()),
        )
        .route("/frontend", get(roles::frontend_members))
        .fallback(role_branch_fallback);

    Router::new()
        .nest(ROLE_PATH, role_branch)
        .fallback(branched_fallback)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(middleware::from_fn(request_decoration_middleware))
        .with_state(state)
}

fn create_role_router() -> Router<AppState> {
    Router::new()
        .route("/backend", get(roles::backend_members))
        .route("/frontend", get(roles::frontend_members))
}

async fn role_branch_fallback(uri: Uri) -> Response {
    warn!(path = %uri.path(), "Role endpoint has not been mapped");
    StatusCode::NOT_FOUND.into_response()
}

async fn branched_fallback(uri: Uri) -> Response {
    if uri.path().contains("team-members") {
        warn!("Endpoint 'team-members' is not allowed while using branched middleware pipeline");
        return StatusCode::NOT_FOUND.into_response();
    }

    error!(path = %uri.path(), "Any branched route has not been mapped");
    (StatusCode::OK, "End of the request.").into_response()
}
