//! Request decoration and timing middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

const BEGIN_BANNER: &str =
    "--------------------------- B E G I N ---------------------------------------------------------------";
const END_BANNER: &str =
    "--------------------------- E N D -------------------------------------------------------------------";

/// Frame every request between BEGIN and END banners in the log
pub async fn request_decoration_middleware(request: Request<Body>, next: Next) -> Response {
    info!("{}", BEGIN_BANNER);
    let response = next.run(request).await;
    info!("{}", END_BANNER);

    response
}

/// Log how long each request took to complete.
/// Note: `TraceLayer` already owns the request span, so this only emits events.
pub async fn timing_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        "Start of request time measurement..."
    );

    let response = next.run(request).await;
    let elapsed = start.elapsed().as_millis();

    info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        request_id = %request_id,
        "Request finished in {} ms",
        elapsed
    );

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}
