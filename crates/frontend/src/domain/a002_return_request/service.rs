//! Return request and return label workflow
//!
//! The flows are generic over [`ReturnsApi`] and [`LabelSaver`] so the
//! client-side rules (validation before any request, state change only after
//! a confirmed success, no file without a successful download) hold no matter
//! which transport is plugged in.

use contracts::domain::a001_order::{OrderAction, OrderDetails, OrderId, OrderStatus};
use contracts::domain::a002_return_request::{
    return_label_file_name, CreateReturnRequest, ReturnRequestForm, ReturnValidationError,
    RETURN_LABEL_MIME,
};
use contracts::shared::ApiError;
use contracts::system::auth::Session;
use thiserror::Error;

/// Backend operations used by the return workflow
#[allow(async_fn_in_trait)]
pub trait ReturnsApi {
    /// Create a return request; returns the backend confirmation message
    async fn create_return(
        &self,
        session: &Session,
        request: &CreateReturnRequest,
    ) -> Result<String, ApiError>;

    /// Fetch the return label PDF
    async fn fetch_return_label(
        &self,
        session: &Session,
        order_id: OrderId,
        email: Option<&str>,
    ) -> Result<Vec<u8>, ApiError>;
}

/// Persists a downloaded label (browser download in the app)
pub trait LabelSaver {
    fn save(&self, bytes: &[u8], mime: &str, file_name: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReturnFlowError {
    #[error(transparent)]
    Validation(#[from] ReturnValidationError),
    #[error("This action is not available for orders with status {0}.")]
    NotAvailable(OrderStatus),
    #[error("Email address is required to continue.")]
    EmailRequired,
    /// Return request rejected; the backend message is shown verbatim
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
    #[error("Error downloading return label")]
    LabelUnavailable(ApiError),
    #[error("Failed to save the return label: {0}")]
    Save(String),
}

/// Validate the form and submit the return request
///
/// Nothing is sent when the order is not DELIVERED or the input is invalid.
/// The caller applies the status change with [`OrderCardState::apply_return_result`].
pub async fn submit_return_request<A: ReturnsApi>(
    api: &A,
    session: &Session,
    order: &OrderDetails,
    form: &ReturnRequestForm,
) -> Result<String, ReturnFlowError> {
    if order.available_action() != Some(OrderAction::RequestReturn) {
        return Err(ReturnFlowError::NotAvailable(order.status));
    }

    let request = form.validate(order.id, session.is_anonymous()).map_err(|e| {
        log::debug!("return request for order {} rejected: {}", order.id, e);
        e
    })?;

    api.create_return(session, &request).await.map_err(|e| {
        log::warn!("return request for order {} failed: {}", order.id, e);
        ReturnFlowError::Api(e)
    })
}

/// Download the return label and hand it to `saver`
///
/// Anonymous buyers must supply the purchase email (`prompted_email`); a
/// missing or blank one aborts before any request. Returns the saved file name.
pub async fn download_return_label<A: ReturnsApi, S: LabelSaver>(
    api: &A,
    saver: &S,
    session: &Session,
    order: &OrderDetails,
    prompted_email: Option<String>,
) -> Result<String, ReturnFlowError> {
    if order.available_action() != Some(OrderAction::DownloadReturnLabel) {
        return Err(ReturnFlowError::NotAvailable(order.status));
    }

    let email = if session.is_anonymous() {
        let email = prompted_email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or(ReturnFlowError::EmailRequired)?;
        Some(email)
    } else {
        None
    };

    let bytes = api
        .fetch_return_label(session, order.id, email.as_deref())
        .await
        .map_err(|e| {
            log::warn!("return label for order {} unavailable: {}", order.id, e);
            ReturnFlowError::LabelUnavailable(e)
        })?;

    let file_name = return_label_file_name(order.id);
    saver
        .save(&bytes, RETURN_LABEL_MIME, &file_name)
        .map_err(ReturnFlowError::Save)?;
    log::info!("return label saved as {}", file_name);
    Ok(file_name)
}

/// Local state of one order card: the order plus the return dialog
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCardState {
    pub order: OrderDetails,
    pub dialog_open: bool,
    /// Error shown inside the return dialog
    pub dialog_error: Option<String>,
    /// Confirmation shown on the card after a successful request
    pub notice: Option<String>,
}

impl OrderCardState {
    pub fn new(order: OrderDetails) -> Self {
        Self {
            order,
            dialog_open: false,
            dialog_error: None,
            notice: None,
        }
    }

    /// Open the dialog; only possible for DELIVERED orders
    pub fn open_return_dialog(&mut self) -> bool {
        if self.order.available_action() != Some(OrderAction::RequestReturn) {
            return false;
        }
        self.dialog_open = true;
        self.dialog_error = None;
        true
    }

    pub fn close_return_dialog(&mut self) {
        self.dialog_open = false;
        self.dialog_error = None;
    }

    /// Apply the outcome of [`submit_return_request`]
    ///
    /// Success moves the order to RETURN_REQUEST and closes the dialog;
    /// failure keeps the dialog open with the error message.
    pub fn apply_return_result(&mut self, result: Result<String, ReturnFlowError>) {
        match result {
            Ok(message) => match self.order.mark_return_requested() {
                Ok(()) => {
                    self.close_return_dialog();
                    self.notice = Some(message);
                }
                Err(e) => self.dialog_error = Some(e),
            },
            Err(e) => self.dialog_error = Some(e.to_string()),
        }
    }
}
