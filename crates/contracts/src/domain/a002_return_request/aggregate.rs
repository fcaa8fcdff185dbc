use crate::domain::a001_order::OrderId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME type of the generated return label
pub const RETURN_LABEL_MIME: &str = "application/pdf";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Basic `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// File name offered for the downloaded return label
pub fn return_label_file_name(order_id: OrderId) -> String {
    format!("RETURN_LABEL_{}.pdf", order_id)
}

/// Body of `POST /api/returns/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReturnRequest {
    pub order_id: OrderId,
    pub reason: String,
    /// Purchase email, only sent by anonymous buyers
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnValidationError {
    #[error("Please enter a reason for the return.")]
    EmptyReason,
    #[error("Please enter the email address used for the order.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Input collected by the return request dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnRequestForm {
    pub reason: String,
    pub email: String,
}

impl ReturnRequestForm {
    pub fn new(reason: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            email: email.into(),
        }
    }

    /// Check the input and build the request body
    ///
    /// `anonymous` is true when no session token is present; only then is
    /// the email required and sent.
    pub fn validate(
        &self,
        order_id: OrderId,
        anonymous: bool,
    ) -> Result<CreateReturnRequest, ReturnValidationError> {
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(ReturnValidationError::EmptyReason);
        }

        let email = if anonymous {
            let email = self.email.trim();
            if email.is_empty() {
                return Err(ReturnValidationError::MissingEmail);
            }
            if !is_valid_email(email) {
                return Err(ReturnValidationError::InvalidEmail);
            }
            Some(email.to_string())
        } else {
            None
        };

        Ok(CreateReturnRequest {
            order_id,
            reason: reason.to_string(),
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reason_rejected() {
        let form = ReturnRequestForm::new("   ", "buyer@example.com");
        assert_eq!(
            form.validate(OrderId(1), true),
            Err(ReturnValidationError::EmptyReason)
        );
        assert_eq!(
            form.validate(OrderId(1), false),
            Err(ReturnValidationError::EmptyReason)
        );
    }

    #[test]
    fn test_anonymous_requires_valid_email() {
        let missing = ReturnRequestForm::new("Wrong size", "");
        assert_eq!(
            missing.validate(OrderId(1), true),
            Err(ReturnValidationError::MissingEmail)
        );

        let invalid = ReturnRequestForm::new("Wrong size", "not-an-email");
        assert_eq!(
            invalid.validate(OrderId(1), true),
            Err(ReturnValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_authenticated_ignores_email() {
        let form = ReturnRequestForm::new(" Wrong size ", "not-an-email");
        let request = form.validate(OrderId(9), false).unwrap();
        assert_eq!(request.reason, "Wrong size");
        assert_eq!(request.email, None);
        assert_eq!(request.order_id, OrderId(9));
    }

    #[test]
    fn test_anonymous_request_carries_trimmed_email() {
        let form = ReturnRequestForm::new("Damaged", " buyer@example.com ");
        let request = form.validate(OrderId(3), true).unwrap();
        assert_eq!(request.email.as_deref(), Some("buyer@example.com"));
    }

    #[test]
    fn test_request_body_is_camel_case() {
        let request = CreateReturnRequest {
            order_id: OrderId(5),
            reason: "Damaged".into(),
            email: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "orderId": 5, "reason": "Damaged", "email": null })
        );
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
    }

    #[test]
    fn test_label_file_name() {
        assert_eq!(return_label_file_name(OrderId(77)), "RETURN_LABEL_77.pdf");
    }
}
