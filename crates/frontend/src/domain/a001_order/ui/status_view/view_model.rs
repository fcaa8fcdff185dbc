//! ViewModel for OrderStatusView
//!
//! Owns the order of one card. The order status only changes after the
//! backend confirmed a return request.

use crate::domain::a002_return_request::{
    download_return_label, submit_return_request, BrowserLabelSaver, HttpReturnsApi,
    OrderCardState,
};
use crate::shared::dialogs;
use contracts::domain::a001_order::{
    order_progress, OrderAction, OrderDetails, OrderProgress, OrderStatus,
};
use contracts::domain::a002_return_request::ReturnRequestForm;
use contracts::system::auth::Session;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const EMAIL_PROMPT: &str = "Please enter the email address used for the purchase:";

#[derive(Clone, Copy)]
pub struct OrderStatusVm {
    pub card: RwSignal<OrderCardState>,
    pub session: Signal<Session>,

    // === Return dialog inputs ===
    pub reason: RwSignal<String>,
    pub email: RwSignal<String>,

    // === In-flight flags ===
    pub submitting: RwSignal<bool>,
    pub downloading: RwSignal<bool>,
}

impl OrderStatusVm {
    pub fn new(order: OrderDetails, session: Signal<Session>) -> Self {
        Self {
            card: RwSignal::new(OrderCardState::new(order)),
            session,
            reason: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
            downloading: RwSignal::new(false),
        }
    }

    pub fn status(&self) -> Signal<OrderStatus> {
        let card = self.card;
        Signal::derive(move || card.with(|c| c.order.status))
    }

    /// Progress model shared by both stepper templates
    pub fn progress(&self) -> Signal<OrderProgress> {
        let card = self.card;
        Signal::derive(move || card.with(|c| order_progress(c.order.status)))
    }

    pub fn action(&self) -> Signal<Option<OrderAction>> {
        let card = self.card;
        Signal::derive(move || card.with(|c| c.order.available_action()))
    }

    pub fn dialog_open(&self) -> Signal<bool> {
        let card = self.card;
        Signal::derive(move || card.with(|c| c.dialog_open))
    }

    pub fn dialog_error(&self) -> Signal<Option<String>> {
        let card = self.card;
        Signal::derive(move || card.with(|c| c.dialog_error.clone()))
    }

    pub fn notice(&self) -> Signal<Option<String>> {
        let card = self.card;
        Signal::derive(move || card.with(|c| c.notice.clone()))
    }

    pub fn is_anonymous(&self) -> bool {
        self.session.with_untracked(Session::is_anonymous)
    }

    pub fn open_return_dialog(&self) {
        self.card.update(|c| {
            c.open_return_dialog();
        });
    }

    pub fn close_return_dialog(&self) {
        self.reason.set(String::new());
        self.email.set(String::new());
        self.card.update(OrderCardState::close_return_dialog);
    }

    /// Validate and send the return request
    pub fn submit_return(&self) {
        if self.submitting.get_untracked() {
            return;
        }

        let vm = *self;
        let form = ReturnRequestForm::new(self.reason.get_untracked(), self.email.get_untracked());
        let session = self.session.get_untracked();
        let order = self.card.with_untracked(|c| c.order.clone());

        vm.submitting.set(true);
        spawn_local(async move {
            let result = submit_return_request(&HttpReturnsApi, &session, &order, &form).await;
            let succeeded = result.is_ok();
            vm.card.update(|c| c.apply_return_result(result));
            if succeeded {
                vm.reason.set(String::new());
                vm.email.set(String::new());
            }
            vm.submitting.set(false);
        });
    }

    /// Download the return label; anonymous buyers are asked for their email first
    pub fn download_label(&self) {
        if self.downloading.get_untracked() {
            return;
        }

        let vm = *self;
        let session = self.session.get_untracked();
        let order = self.card.with_untracked(|c| c.order.clone());
        let email = if session.is_anonymous() {
            dialogs::prompt(EMAIL_PROMPT)
        } else {
            None
        };

        vm.downloading.set(true);
        spawn_local(async move {
            let result =
                download_return_label(&HttpReturnsApi, &BrowserLabelSaver, &session, &order, email)
                    .await;
            if let Err(e) = result {
                dialogs::alert(&e.to_string());
            }
            vm.downloading.set(false);
        });
    }
}
