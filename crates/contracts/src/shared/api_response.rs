use serde::{Deserialize, Serialize};

/// Envelope returned by the backend for JSON endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardResponse<T> {
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub status: u16,
}

impl<T> StandardResponse<T> {
    /// Message if the backend sent a non-blank one
    pub fn message(&self) -> Option<&str> {
        let message = self.message.trim();
        (!message.is_empty()).then_some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only_envelope() {
        let response: StandardResponse<String> = serde_json::from_str(
            r#"{"message":"Return request created","status":201}"#,
        )
        .unwrap();
        assert_eq!(response.message(), Some("Return request created"));
        assert_eq!(response.data, None);
        assert_eq!(response.status, 201);
    }

    #[test]
    fn test_blank_message_is_none() {
        let response: StandardResponse<String> =
            serde_json::from_str(r#"{"message":"  ","status":400}"#).unwrap();
        assert_eq!(response.message(), None);
    }
}
