use thiserror::Error;

/// Failure of a call to the backend API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request URL or body could not be built
    #[error("Failed to build request: {0}")]
    Request(String),
    /// Request could not be sent or the body could not be read
    #[error("Failed to send request: {0}")]
    Network(String),
    /// Non-2xx response; `message` is the backend text when it sent one
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user; backend messages are passed through verbatim
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_is_verbatim() {
        let err = ApiError::Status {
            status: 403,
            message: "Return period has expired".into(),
        };
        assert_eq!(err.user_message(), "Return period has expired");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_network_message() {
        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message(), "Failed to send request: offline");
        assert_eq!(err.status(), None);
    }
}
