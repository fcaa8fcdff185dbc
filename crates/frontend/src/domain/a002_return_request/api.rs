//! HTTP layer for `/api/returns`

use super::service::{LabelSaver, ReturnsApi};
use crate::shared::api_utils::{api_url, error_from_response};
use crate::shared::download;
use contracts::domain::a001_order::OrderId;
use contracts::domain::a002_return_request::CreateReturnRequest;
use contracts::shared::{ApiError, StandardResponse};
use contracts::system::auth::Session;
use gloo_net::http::Request;

const CREATE_FALLBACK: &str = "Failed to create return request";
const LABEL_FALLBACK: &str = "Error downloading return label";
const CREATED_MESSAGE: &str = "Return request created.";

/// `/api/returns/create?lang=..`
pub fn create_return_path(lang: &str) -> String {
    format!("/api/returns/create?lang={}", urlencoding::encode(lang))
}

/// `/api/returns/{id}/label`, with `?email=..` for anonymous buyers
pub fn return_label_path(order_id: OrderId, email: Option<&str>) -> String {
    match email {
        Some(email) => format!(
            "/api/returns/{}/label?email={}",
            order_id,
            urlencoding::encode(email)
        ),
        None => format!("/api/returns/{}/label", order_id),
    }
}

/// Success text of the create endpoint: the envelope message, else the raw body
pub fn created_message(body: &str) -> String {
    match serde_json::from_str::<StandardResponse<serde_json::Value>>(body) {
        Ok(envelope) => envelope
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| CREATED_MESSAGE.to_string()),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => CREATED_MESSAGE.to_string(),
    }
}

/// [`ReturnsApi`] backed by the real backend
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpReturnsApi;

impl ReturnsApi for HttpReturnsApi {
    async fn create_return(
        &self,
        session: &Session,
        request: &CreateReturnRequest,
    ) -> Result<String, ApiError> {
        let url = api_url(&create_return_path(&session.lang));

        let mut builder = Request::post(&url);
        if let Some(bearer) = session.bearer() {
            builder = builder.header("Authorization", &bearer);
        }

        let response = builder
            .json(request)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response, CREATE_FALLBACK).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        log::info!("return request created for order {}", request.order_id);
        Ok(created_message(&body))
    }

    async fn fetch_return_label(
        &self,
        session: &Session,
        order_id: OrderId,
        email: Option<&str>,
    ) -> Result<Vec<u8>, ApiError> {
        // The token identifies the owner; the email is only needed without one
        let email = if session.is_anonymous() { email } else { None };
        let url = api_url(&return_label_path(order_id, email));

        let mut builder = Request::get(&url);
        if let Some(bearer) = session.bearer() {
            builder = builder.header("Authorization", &bearer);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from_response(response, LABEL_FALLBACK).await);
        }

        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// [`LabelSaver`] that triggers a browser download
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLabelSaver;

impl LabelSaver for BrowserLabelSaver {
    fn save(&self, bytes: &[u8], mime: &str, file_name: &str) -> Result<(), String> {
        download::save_bytes(bytes, mime, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_return_path() {
        assert_eq!(create_return_path("es"), "/api/returns/create?lang=es");
    }

    #[test]
    fn test_return_label_path_encodes_email() {
        assert_eq!(return_label_path(OrderId(12), None), "/api/returns/12/label");
        assert_eq!(
            return_label_path(OrderId(12), Some("ana+art@example.com")),
            "/api/returns/12/label?email=ana%2Bart%40example.com"
        );
    }

    #[test]
    fn test_created_message() {
        assert_eq!(
            created_message(r#"{"message":"Return request sent","status":201}"#),
            "Return request sent"
        );
        assert_eq!(created_message("Return created"), "Return created");
        assert_eq!(created_message(""), CREATED_MESSAGE);
    }
}
