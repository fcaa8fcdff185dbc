//! Customer orders
//!
//! Structure:
//! - api.rs: order fetch functions
//! - ui/status_view: OrderStatusView (progress, actions, items, return dialog)
//! - ui/list: "My orders" paginated page
//! - ui/details: single order page
//! - ui/anonymous: order page for buyers without an account

pub mod api;
pub mod ui;
