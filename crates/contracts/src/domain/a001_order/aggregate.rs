use crate::domain::common::AggregateId;
use crate::shared::serde_helpers::null_as_default;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Database id of an order (used in API paths, not shown to the customer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(OrderId::new)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order lifecycle status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Paid,
    InPreparation,
    Sent,
    Delivered,
    Canceled,
    ReturnRequest,
    ReturnAccepted,
}

impl OrderStatus {
    /// Wire code, e.g. `IN_PREPARATION`
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "PAID",
            OrderStatus::InPreparation => "IN_PREPARATION",
            OrderStatus::Sent => "SENT",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::ReturnRequest => "RETURN_REQUEST",
            OrderStatus::ReturnAccepted => "RETURN_ACCEPTED",
        }
    }

    /// Display label: the wire code with underscores as spaces
    pub fn label(&self) -> String {
        self.code().replace('_', " ")
    }

    /// Linear fulfilment states shown as stepper milestones
    pub fn is_milestone(&self) -> bool {
        matches!(
            self,
            OrderStatus::Paid
                | OrderStatus::InPreparation
                | OrderStatus::Sent
                | OrderStatus::Delivered
        )
    }

    /// No further client-triggered action exists for these states
    pub fn is_terminal_for_client(&self) -> bool {
        matches!(self, OrderStatus::Canceled | OrderStatus::ReturnAccepted)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Catalogue section of an ordered product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSection {
    Clothing,
    Accessories,
    Decoration,
    Publications,
    #[serde(other)]
    Other,
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    /// Absent for accessories
    #[serde(default)]
    pub size: Option<String>,
    pub quantity: i32,
    /// Unit price
    pub price: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub section: Option<ProductSection>,
}

impl OrderItem {
    /// Size shown in the item card; `None` when the item has no size
    pub fn size_label(&self) -> Option<&str> {
        if self.section == Some(ProductSection::Accessories) {
            return None;
        }
        self.size.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Action offered to the customer for the current status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    RequestReturn,
    DownloadReturnLabel,
}

/// Order as seen by its owner (or an anonymous buyer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: OrderId,
    /// Public order number
    #[serde(default)]
    pub identifier: Option<i64>,
    pub total_price: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_date: Option<NaiveDate>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl OrderDetails {
    /// Contextual action for the current status
    ///
    /// RETURN_ACCEPTED offers nothing; the label is gated on RETURN_REQUEST.
    pub fn available_action(&self) -> Option<OrderAction> {
        if self.status.is_terminal_for_client() {
            return None;
        }
        match self.status {
            OrderStatus::Delivered => Some(OrderAction::RequestReturn),
            OrderStatus::ReturnRequest => Some(OrderAction::DownloadReturnLabel),
            _ => None,
        }
    }

    /// Apply the backend-confirmed DELIVERED -> RETURN_REQUEST transition
    pub fn mark_return_requested(&mut self) -> Result<(), String> {
        if self.status != OrderStatus::Delivered {
            return Err(format!(
                "Return can only be requested for delivered orders (status: {})",
                self.status
            ));
        }
        self.status = OrderStatus::ReturnRequest;
        Ok(())
    }

    /// Number shown to the customer; the db id when the backend sent none
    pub fn order_number(&self) -> i64 {
        self.identifier.unwrap_or(self.id.0)
    }

    /// One-line shipping address, empty parts skipped
    pub fn shipping_summary(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in [
            &self.address_line1,
            &self.address_line2,
            &self.postal_code,
            &self.city,
            &self.country,
        ] {
            if let Some(value) = part.as_deref() {
                parts.push(value);
            }
        }
        parts
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Image path for a product from a `productImages` map (keys are ids as strings)
pub fn product_image(images: &HashMap<String, String>, product_id: i64) -> Option<&str> {
    images.get(&product_id.to_string()).map(String::as_str)
}

/// One page of `/api/orders/myOrders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyOrdersPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: Vec<OrderDetails>,
    /// Product id -> main image path
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_images: HashMap<String, String>,
    #[serde(default)]
    pub current_page: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_items: u64,
}

impl MyOrdersPage {
    pub fn image_for(&self, product_id: i64) -> Option<&str> {
        product_image(&self.product_images, product_id)
    }

    /// Whether a following page exists
    ///
    /// Falls back to "the page came back full" when the backend omits
    /// `totalPages`.
    pub fn has_next(&self, page_size: usize) -> bool {
        if self.total_pages > 0 {
            self.current_page + 1 < self.total_pages
        } else {
            self.orders.len() == page_size
        }
    }
}

/// One order returned by the account-less lookup; `orders` holds a single order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymousOrderLookup {
    #[serde(rename = "orders")]
    pub order: OrderDetails,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_images: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_json(status: &str) -> serde_json::Value {
        json!({
            "id": 42,
            "identifier": 100234,
            "totalPrice": 59.98,
            "status": status,
            "addressLine1": "Calle Mayor 1",
            "postalCode": "41001",
            "city": "Sevilla",
            "country": "ES",
            "items": [
                { "id": 1, "productId": 7, "name": "T-Shirt", "size": "M", "quantity": 2, "price": 29.99, "section": "CLOTHING" },
                { "id": 2, "productId": 8, "name": "Tote bag", "size": "M", "quantity": 1, "price": 0.0, "section": "ACCESSORIES" }
            ],
            "createdDate": "2025-03-15"
        })
    }

    #[test]
    fn test_order_deserializes_from_backend_json() {
        let order: OrderDetails = serde_json::from_value(order_json("IN_PREPARATION")).unwrap();
        assert_eq!(order.id, OrderId(42));
        assert_eq!(order.status, OrderStatus::InPreparation);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.created_date, NaiveDate::from_ymd_opt(2025, 3, 15));
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_status_wire_codes() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::ReturnRequest).unwrap(),
            "\"RETURN_REQUEST\""
        );
        assert_eq!(OrderStatus::InPreparation.label(), "IN PREPARATION");
        assert!(serde_json::from_str::<OrderStatus>("\"SHIPPED\"").is_err());
    }

    #[test]
    fn test_available_action_by_status() {
        let mut order: OrderDetails = serde_json::from_value(order_json("SENT")).unwrap();
        assert_eq!(order.available_action(), None);

        order.status = OrderStatus::Delivered;
        assert_eq!(order.available_action(), Some(OrderAction::RequestReturn));

        order.status = OrderStatus::ReturnRequest;
        assert_eq!(
            order.available_action(),
            Some(OrderAction::DownloadReturnLabel)
        );

        order.status = OrderStatus::ReturnAccepted;
        assert_eq!(order.available_action(), None);
        order.status = OrderStatus::Canceled;
        assert_eq!(order.available_action(), None);
    }

    #[test]
    fn test_mark_return_requested_only_from_delivered() {
        let mut order: OrderDetails = serde_json::from_value(order_json("DELIVERED")).unwrap();
        assert!(order.mark_return_requested().is_ok());
        assert_eq!(order.status, OrderStatus::ReturnRequest);

        assert!(order.mark_return_requested().is_err());
        assert_eq!(order.status, OrderStatus::ReturnRequest);
    }

    #[test]
    fn test_size_label_hidden_for_accessories() {
        let order: OrderDetails = serde_json::from_value(order_json("PAID")).unwrap();
        assert_eq!(order.items[0].size_label(), Some("M"));
        assert_eq!(order.items[1].size_label(), None);
    }

    #[test]
    fn test_shipping_summary_skips_missing_parts() {
        let order: OrderDetails = serde_json::from_value(order_json("PAID")).unwrap();
        assert_eq!(order.shipping_summary(), "Calle Mayor 1, 41001, Sevilla, ES");
    }

    #[test]
    fn test_my_orders_page_has_next() {
        let page = MyOrdersPage {
            current_page: 0,
            total_pages: 2,
            ..Default::default()
        };
        assert!(page.has_next(3));

        let last = MyOrdersPage {
            current_page: 1,
            total_pages: 2,
            ..Default::default()
        };
        assert!(!last.has_next(3));
    }

    #[test]
    fn test_my_orders_page_has_next_without_total_pages() {
        let order: OrderDetails = serde_json::from_value(order_json("PAID")).unwrap();
        let full = MyOrdersPage {
            orders: vec![order.clone(), order.clone(), order.clone()],
            ..Default::default()
        };
        assert!(full.has_next(3));

        let short = MyOrdersPage {
            orders: vec![order],
            ..Default::default()
        };
        assert!(!short.has_next(3));
    }

    #[test]
    fn test_null_fields_decode_as_missing() {
        let order: OrderDetails = serde_json::from_value(json!({
            "id": 1,
            "identifier": null,
            "totalPrice": 10.0,
            "status": "PAID",
            "addressLine1": null,
            "addressLine2": null,
            "city": "Sevilla",
            "items": null,
            "createdDate": null
        }))
        .unwrap();
        assert_eq!(order.address_line1, None);
        assert!(order.items.is_empty());
        assert_eq!(order.order_number(), 1);
        assert_eq!(order.shipping_summary(), "Sevilla");

        let page: MyOrdersPage = serde_json::from_value(json!({
            "orders": [{ "id": 2, "identifier": 7, "totalPrice": 5.0, "status": "SENT", "addressLine1": null }],
            "productImages": null,
            "currentPage": 0,
            "totalPages": 1,
            "totalItems": 1
        }))
        .unwrap();
        assert_eq!(page.orders.len(), 1);
        assert_eq!(page.orders[0].order_number(), 7);
        assert!(page.product_images.is_empty());
    }

    #[test]
    fn test_terminal_statuses_offer_no_action() {
        let mut order: OrderDetails = serde_json::from_value(order_json("PAID")).unwrap();
        for status in [OrderStatus::Canceled, OrderStatus::ReturnAccepted] {
            assert!(status.is_terminal_for_client());
            order.status = status;
            assert_eq!(order.available_action(), None);
        }
        assert!(!OrderStatus::Delivered.is_terminal_for_client());
        assert!(!OrderStatus::ReturnRequest.is_terminal_for_client());
    }

    #[test]
    fn test_my_orders_page_image_lookup() {
        let page: MyOrdersPage = serde_json::from_value(json!({
            "orders": [],
            "productImages": { "7": "/product_media/shirt.png" },
            "currentPage": 0,
            "totalPages": 0,
            "totalItems": 0
        }))
        .unwrap();
        assert_eq!(page.image_for(7), Some("/product_media/shirt.png"));
        assert_eq!(page.image_for(8), None);
    }

    #[test]
    fn test_order_id_from_string() {
        assert_eq!(OrderId::from_string(" 17 ").unwrap(), OrderId(17));
        assert!(OrderId::from_string("abc").is_err());
    }
}
