//! API request and response types

pub mod error;
pub mod json;
pub mod message;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use message::MessageResponse;
