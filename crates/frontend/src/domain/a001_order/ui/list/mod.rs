mod state;

pub use state::MyOrdersState;

use crate::domain::a001_order::api::fetch_my_orders;
use crate::domain::a001_order::ui::status_view::OrderStatusView;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireAuth;
use contracts::domain::a001_order::MyOrdersPage;
use contracts::system::auth::Session;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// "My orders": paginated list of the signed-in user's orders
#[component]
pub fn MyOrders(#[prop(into)] session: Signal<Session>) -> impl IntoView {
    view! {
        <RequireAuth session=session>
            <MyOrdersList session=session />
        </RequireAuth>
    }
}

#[component]
fn MyOrdersList(session: Signal<Session>) -> impl IntoView {
    let state = RwSignal::new(MyOrdersState::default());
    let data = RwSignal::new(MyOrdersPage::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Reload whenever the page index changes
    let page = Memo::new(move |_| state.with(|s| s.page));
    Effect::new(move |_| {
        let page = page.get();
        let size = state.with_untracked(|s| s.page_size);
        let session = session.get_untracked();

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_my_orders(&session, page, size).await {
                Ok(result) => {
                    log::debug!("loaded {} orders (page {})", result.orders.len(), page);
                    state.update(|s| s.apply_page(&result));
                    data.set(result);
                }
                Err(e) => {
                    log::error!("Failed to fetch orders: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    });

    let orders = Signal::derive(move || data.with(|d| d.orders.clone()));
    let is_empty = Signal::derive(move || {
        !loading.get() && error.with(Option::is_none) && data.with(|d| d.orders.is_empty())
    });

    view! {
        <div class="my-orders">
            <div class="page-header">
                {icon("orders")}
                <h2>"My Orders"</h2>
            </div>

            {move || loading.get().then(|| view! { <p class="my-orders__loading">"Loading..."</p> })}
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || is_empty.get()>
                <p class="my-orders__empty">"You haven't placed any orders yet."</p>
            </Show>

            <div class="my-orders__list">
                <For
                    each=move || orders.get()
                    key=|order| (order.id, order.status)
                    children=move |order| {
                        let images = data.with_untracked(|d| d.product_images.clone());
                        view! {
                            <OrderStatusView order=order session=session product_images=images />
                        }
                    }
                />
            </div>

            <div class="my-orders__pagination">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        state.update(|s| {
                            s.prev();
                        });
                    }
                    disabled=Signal::derive(move || loading.get() || !state.with(MyOrdersState::can_prev))
                >
                    {icon("chevron-left")}
                    " Previous"
                </Button>
                <span class="my-orders__page">
                    {move || {
                        let total = data.with(|d| d.total_pages);
                        state.with(|s| s.page_label(total))
                    }}
                </span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        state.update(|s| {
                            s.next();
                        });
                    }
                    disabled=Signal::derive(move || loading.get() || !state.with(MyOrdersState::can_next))
                >
                    "Next "
                    {icon("chevron-right")}
                </Button>
            </div>
        </div>
    }
}
