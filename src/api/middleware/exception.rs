//! Converts handler panics into 500 responses

use std::any::Any;

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

/// Signature of the panic-to-response conversion
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response<Body>;

/// Layer that catches panics from inner services and answers 500 with the
/// panic message as a plain-text body
pub fn exception_handler_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = panic_message(&*err);

    error!(
        "Error caught in exception handler middleware with message {}",
        message
    );

    let mut response = Response::new(Body::from(message));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/plain; charset=utf-8"),
    );

    response
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    }
}
