//! Correlation identifiers attached to requests

use uuid::Uuid;

/// Header carrying the per-request correlation ID
pub const CORRELATION_ID_HEADER: &str = "correlation-id";

/// An opaque correlation ID, generated once per owner
///
/// The application state holds one for the lifetime of the process; the
/// correlation middleware creates a fresh one for every request it decorates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_ids_are_unique() {
        assert_ne!(CorrelationId::new(), CorrelationId::new());
    }

    #[test]
    fn test_correlation_id_is_uuid() {
        let id = CorrelationId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }
}
