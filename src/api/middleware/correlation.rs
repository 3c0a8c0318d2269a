//! Correlation ID middleware

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::api::state::AppState;
use crate::infrastructure::correlation::{CorrelationId, CORRELATION_ID_HEADER};

/// Path fragment that opts a request into correlation
const CORRELATED_PATH_FRAGMENT: &str = "team-members";

/// Decorate team member requests with a fresh `correlation-id` header.
/// Other requests pass through untouched.
pub async fn correlation_id_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if request.uri().path().contains(CORRELATED_PATH_FRAGMENT) {
        info!(
            correlation_id = %state.static_correlation_id,
            "Static correlation ID: {}",
            state.static_correlation_id
        );

        let scoped = CorrelationId::new();

        if let Ok(value) = HeaderValue::from_str(scoped.as_str()) {
            request
                .headers_mut()
                .insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
        }
    }

    next.run(request).await
}

/// Log the correlation ID of requests that carry one
pub async fn correlation_logging_middleware(request: Request<Body>, next: Next) -> Response {
    if let Some(correlation_id) = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        info!(
            correlation_id = %correlation_id,
            "Request has been decorated with correlation ID {}",
            correlation_id
        );
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use axum::{http::HeaderMap, middleware, routing::get, Router};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::team_member::TeamMemberRegistry;

    async fn echo_correlation_id(headers: HeaderMap) -> String {
        headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("none")
            .to_string()
    }

    fn app() -> Router {
        let state = AppState::new(TeamMemberRegistry::empty(), "Test");

        Router::new()
            .route("/team-members", get(echo_correlation_id))
            .route("/other", get(echo_correlation_id))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                correlation_id_middleware,
            ))
            .with_state(state)
    }

    async fn call(uri: &str) -> String {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_team_member_requests_get_correlation_id() {
        let id = call("/team-members").await;
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[tokio::test]
    async fn test_each_request_gets_its_own_correlation_id() {
        assert_ne!(call("/team-members").await, call("/team-members").await);
    }

    #[tokio::test]
    async fn test_other_requests_are_untouched() {
        assert_eq!(call("/other").await, "none");
    }
}
