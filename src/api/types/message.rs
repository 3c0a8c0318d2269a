//! Plain confirmation messages returned by mutating endpoints

use serde::{Deserialize, Serialize};

/// Confirmation message body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_string(&MessageResponse::new("Done.")).unwrap();
        assert_eq!(json, r#"{"message":"Done."}"#);
    }
}
