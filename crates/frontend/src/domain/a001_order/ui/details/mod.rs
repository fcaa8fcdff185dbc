use crate::domain::a001_order::api::fetch_order;
use crate::domain::a001_order::ui::status_view::OrderStatusView;
use crate::system::auth::guard::RequireAuth;
use contracts::domain::a001_order::{OrderDetails, OrderId};
use contracts::domain::common::AggregateId;
use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

/// `/orders/:id`
#[component]
pub fn OrderDetailRoute(#[prop(into)] session: Signal<Session>) -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| {
        params.with(|p| p.get("id").map(|raw| OrderId::from_string(&raw)))
    });

    move || match id.get() {
        Some(Ok(id)) => view! {
            <RequireAuth session=session>
                <OrderDetail id=id session=session />
            </RequireAuth>
        }
        .into_any(),
        Some(Err(e)) => {
            log::warn!("invalid order id in route: {}", e);
            view! { <div class="alert alert--error">"Order not found"</div> }.into_any()
        }
        None => view! { <div class="alert alert--error">"Order not found"</div> }.into_any(),
    }
}

/// Single order card loaded by id
#[component]
pub fn OrderDetail(id: OrderId, #[prop(into)] session: Signal<Session>) -> impl IntoView {
    let order = RwSignal::new(None::<OrderDetails>);
    let error = RwSignal::new(None::<String>);

    let session_snapshot = session.get_untracked();
    spawn_local(async move {
        match fetch_order(&session_snapshot, id).await {
            Ok(o) => order.set(Some(o)),
            Err(e) => {
                log::error!("Failed to fetch order {}: {}", id, e);
                error.set(Some(e.user_message()));
            }
        }
    });

    view! {
        <div class="order-detail">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || match order.get() {
                Some(o) => view! { <OrderStatusView order=o session=session /> }.into_any(),
                None if error.with(Option::is_none) => view! { <p>"Loading..."</p> }.into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}
