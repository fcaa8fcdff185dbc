//! API utilities for frontend-backend communication
//!
//! Provides the API base URL, shared constants and the mapping of non-2xx
//! responses to [`ApiError`].

use contracts::shared::{ApiError, StandardResponse};
use gloo_net::http::Response;

/// Orders per page on "My orders"
pub const MY_ORDERS_PAGE_SIZE: usize = 3;

/// Shown when a product has no image or the image fails to load
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Get the base URL for API requests
///
/// `ARTSHOP_API_BASE` set at build time wins; otherwise requests go to the
/// origin that served the page (the dev server proxies `/api`).
///
/// # Returns
/// - API base URL like "http://localhost:8080", without trailing slash
/// - Empty string if window is not available (relative URLs)
pub fn api_base() -> String {
    if let Some(base) = option_env!("ARTSHOP_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/orders/42");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path of a product thumbnail, or the placeholder when none is known
///
/// Image paths come from the backend with a leading slash
/// (`/product_media/x.png`) but are accepted without one too.
pub fn product_image_path(image_path: Option<&str>) -> String {
    match image_path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) if path.starts_with('/') => format!("/api/product{}", path),
        Some(path) => format!("/api/product/{}", path),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Console log level for the build profile
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Map a non-2xx body to an [`ApiError`]
///
/// The backend wraps errors in `{message, status}`; its message is kept
/// verbatim. Plain-text bodies are used as-is, anything else (empty, HTML
/// error pages) falls back to `fallback`.
pub fn status_error(status: u16, body: &str, fallback: &str) -> ApiError {
    let body = body.trim();
    let message = match serde_json::from_str::<StandardResponse<serde_json::Value>>(body) {
        Ok(envelope) => envelope.message().map(str::to_string),
        Err(_) if !body.is_empty() && !body.starts_with('<') && !body.starts_with('{') => {
            Some(body.to_string())
        }
        Err(_) => None,
    };
    ApiError::Status {
        status,
        message: message.unwrap_or_else(|| fallback.to_string()),
    }
}

/// Read a failed response into an [`ApiError`]
pub async fn error_from_response(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} {} -> {}", fallback, response.url(), status);
    status_error(status, &body, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_image_path() {
        assert_eq!(
            product_image_path(Some("/product_media/a.png")),
            "/api/product/product_media/a.png"
        );
        assert_eq!(product_image_path(Some("a.png")), "/api/product/a.png");
        assert_eq!(product_image_path(Some("  ")), PLACEHOLDER_IMAGE);
        assert_eq!(product_image_path(None), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_status_error_uses_backend_message() {
        let err = status_error(
            400,
            r#"{"message":"Order is not eligible for return","status":400}"#,
            "Failed to create return request",
        );
        assert_eq!(err.user_message(), "Order is not eligible for return");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_status_error_plain_text_and_fallback() {
        let plain = status_error(500, "Internal failure", "fallback");
        assert_eq!(plain.user_message(), "Internal failure");

        let html = status_error(502, "<html>Bad gateway</html>", "fallback");
        assert_eq!(html.user_message(), "fallback");

        let empty = status_error(404, "", "fallback");
        assert_eq!(empty.user_message(), "fallback");

        let blank_json = status_error(403, r#"{"message":"","status":403}"#, "fallback");
        assert_eq!(blank_json.user_message(), "fallback");
    }
}
