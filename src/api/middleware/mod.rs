//! API middleware components

pub mod correlation;
pub mod exception;
pub mod logging;

pub use correlation::{correlation_id_middleware, correlation_logging_middleware};
pub use exception::exception_handler_layer;
pub use logging::{request_decoration_middleware, timing_middleware};
