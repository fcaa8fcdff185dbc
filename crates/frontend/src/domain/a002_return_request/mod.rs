//! Return request workflow
//!
//! Structure:
//! - api.rs: HTTP implementations of the workflow seams
//! - service.rs: validation, submission and label download rules
//! - ui/: return request dialog

pub mod api;
pub mod service;
pub mod ui;

pub use api::{BrowserLabelSaver, HttpReturnsApi};
pub use service::{
    download_return_label, submit_return_request, LabelSaver, OrderCardState, ReturnFlowError,
    ReturnsApi,
};
