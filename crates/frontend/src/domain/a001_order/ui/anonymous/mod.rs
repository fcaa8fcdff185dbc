use crate::domain::a001_order::ui::status_view::OrderStatusView;
use contracts::domain::a001_order::AnonymousOrderLookup;
use contracts::system::auth::Session;
use leptos::prelude::*;
use serde::Deserialize;

/// Router state pushed by the page that navigates here
#[derive(Debug, Deserialize)]
struct HistoryState {
    #[serde(default)]
    order: Option<AnonymousOrderLookup>,
}

/// Order carried in a serialized history state, if any
pub fn order_from_history_state(json: &str) -> Option<AnonymousOrderLookup> {
    match serde_json::from_str::<HistoryState>(json) {
        Ok(state) => state.order,
        Err(e) => {
            log::warn!("history state has no readable order: {}", e);
            None
        }
    }
}

fn read_history_order() -> Option<AnonymousOrderLookup> {
    let state = web_sys::window()?.history().ok()?.state().ok()?;
    if state.is_null() || state.is_undefined() {
        return None;
    }
    let json = js_sys::JSON::stringify(&state).ok()?.as_string()?;
    order_from_history_state(&json)
}

/// `/order/anonymous`: order card for buyers without an account
///
/// The token is used when present; without one the return flow asks for the
/// purchase email.
#[component]
pub fn AnonymousOrder(#[prop(into)] session: Signal<Session>) -> impl IntoView {
    match read_history_order() {
        Some(lookup) => view! {
            <div class="order-detail">
                <OrderStatusView
                    order=lookup.order
                    session=session
                    product_images=lookup.product_images
                />
            </div>
        }
        .into_any(),
        None => view! { <div class="alert alert--error">"Order not found"</div> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::{OrderAction, OrderStatus};

    #[test]
    fn test_order_from_history_state() {
        let json = r#"{
            "order": {
                "orders": {
                    "id": 9,
                    "identifier": 100009,
                    "totalPrice": 45.0,
                    "status": "RETURN_REQUEST",
                    "addressLine1": null,
                    "items": []
                },
                "productImages": { "3": "/product_media/print.png" }
            }
        }"#;
        let lookup = order_from_history_state(json).unwrap();
        assert_eq!(lookup.order.status, OrderStatus::ReturnRequest);
        assert_eq!(
            lookup.order.available_action(),
            Some(OrderAction::DownloadReturnLabel)
        );
        assert_eq!(lookup.order.order_number(), 100009);
        assert_eq!(
            lookup.product_images.get("3").map(String::as_str),
            Some("/product_media/print.png")
        );
    }

    #[test]
    fn test_history_state_without_order() {
        assert!(order_from_history_state(r#"{"idx":2}"#).is_none());
        assert!(order_from_history_state("null").is_none());
        assert!(order_from_history_state(r#"{"order":{"orders":{"id":1}}}"#).is_none());
    }
}
