mod items;
mod progress;
mod view_model;

pub use items::OrderItems;
pub use progress::{OrderProgressDisplay, ProgressLayout};
pub use view_model::OrderStatusVm;

use crate::domain::a002_return_request::ui::ReturnRequestModal;
use crate::shared::icons::icon;
use crate::shared::number_format::format_euro;
use contracts::domain::a001_order::{OrderAction, OrderDetails};
use contracts::system::auth::Session;
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::*;

/// Order card: header, progress stepper, items and the return flow
#[component]
pub fn OrderStatusView(
    order: OrderDetails,
    #[prop(into)] session: Signal<Session>,
    /// Product id -> image path, as delivered with the order list
    #[prop(optional)]
    product_images: HashMap<String, String>,
) -> impl IntoView {
    let number = order.order_number();
    let total = format_euro(order.total_price);
    let shipping = order.shipping_summary();
    let created = order
        .created_date
        .map(|d| d.format("%d.%m.%Y").to_string());
    let items = order.items.clone();

    let vm = OrderStatusVm::new(order, session);
    let status = vm.status();
    let progress = vm.progress();
    let action = vm.action();
    let notice = vm.notice();
    let dialog_open = vm.dialog_open();
    let dialog_error = vm.dialog_error();
    let anonymous = vm.is_anonymous();
    let busy = Signal::derive(move || vm.submitting.get() || vm.downloading.get());

    let action_button = move || {
        action.get().map(|a| match a {
            OrderAction::RequestReturn => view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.open_return_dialog()
                    disabled=busy
                >
                    {icon("undo")}
                    " Request return"
                </Button>
            }
            .into_any(),
            OrderAction::DownloadReturnLabel => view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.download_label()
                    disabled=busy
                >
                    {icon("download")}
                    {move || {
                        if vm.downloading.get() {
                            " Downloading..."
                        } else {
                            " Download return label"
                        }
                    }}
                </Button>
            }
            .into_any(),
        })
    };

    view! {
        <div class="order-card">
            <div class="order-card__header">
                <div class="order-card__title">
                    {icon("orders")}
                    <h3>{format!("Order #{}", number)}</h3>
                </div>
                <div class="order-card__actions">{action_button}</div>
            </div>

            {move || notice.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

            <div class="order-card__progress order-card__progress--desktop">
                <OrderProgressDisplay progress=progress layout=ProgressLayout::Horizontal />
            </div>
            <div class="order-card__progress order-card__progress--mobile">
                <OrderProgressDisplay progress=progress layout=ProgressLayout::Vertical />
            </div>

            <div class="order-card__summary">
                <p>
                    <span class="order-card__caption">"Status: "</span>
                    <span class="order-card__status">{move || status.get().label()}</span>
                </p>
                <p>
                    <span class="order-card__caption">"Total: "</span>
                    {total}
                </p>
                {created.map(|d| view! {
                    <p>
                        <span class="order-card__caption">"Date: "</span>
                        {d}
                    </p>
                })}
                {(!shipping.is_empty()).then(|| view! {
                    <p class="order-card__address">
                        {icon("map-pin")}
                        {shipping}
                    </p>
                })}
            </div>

            <OrderItems items=items product_images=product_images />

            <Show when=move || dialog_open.get()>
                <ReturnRequestModal
                    anonymous=anonymous
                    reason=vm.reason
                    email=vm.email
                    error=dialog_error
                    submitting=vm.submitting
                    on_submit=Callback::new(move |_| vm.submit_return())
                    on_close=Callback::new(move |_| vm.close_return_dialog())
                />
            </Show>
        </div>
    }
}
