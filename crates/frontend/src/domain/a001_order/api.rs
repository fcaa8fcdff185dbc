//! HTTP layer for `/api/orders`

use crate::shared::api_utils::{api_url, error_from_response};
use contracts::domain::a001_order::{MyOrdersPage, OrderDetails, OrderId};
use contracts::shared::ApiError;
use contracts::system::auth::Session;
use gloo_net::http::{Request, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PageQuery {
    page: usize,
    size: usize,
}

/// `/api/orders/myOrders?page=..&size=..`
pub fn my_orders_path(page: usize, size: usize) -> Result<String, ApiError> {
    let query = serde_qs::to_string(&PageQuery { page, size })
        .map_err(|e| ApiError::Request(e.to_string()))?;
    Ok(format!("/api/orders/myOrders?{}", query))
}

async fn get_json<T>(url: &str, session: &Session, fallback: &str) -> Result<T, ApiError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let mut builder = Request::get(url);
    if let Some(bearer) = session.bearer() {
        builder = builder.header("Authorization", &bearer);
    }

    let response: Response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(response, fallback).await);
    }

    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to parse {}: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

/// One page of the signed-in user's orders, newest first
pub async fn fetch_my_orders(
    session: &Session,
    page: usize,
    size: usize,
) -> Result<MyOrdersPage, ApiError> {
    let url = api_url(&my_orders_path(page, size)?);
    log::debug!("fetching my orders page {} (size {})", page, size);
    get_json(&url, session, "Failed to fetch orders").await
}

/// Single order visible to the owner
pub async fn fetch_order(session: &Session, id: OrderId) -> Result<OrderDetails, ApiError> {
    let url = api_url(&format!("/api/orders/{}", id));
    get_json(&url, session, "Failed to fetch order").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_my_orders_path() {
        assert_eq!(
            my_orders_path(2, 3).unwrap(),
            "/api/orders/myOrders?page=2&size=3"
        );
    }
}
