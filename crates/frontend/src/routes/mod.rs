use crate::domain::a001_order::ui::anonymous::AnonymousOrder;
use crate::domain::a001_order::ui::details::OrderDetailRoute;
use crate::domain::a001_order::ui::list::MyOrders;
use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

pub const MY_ORDERS_PATH: &str = "/orders/myOrders";

#[component]
pub fn AppRoutes(#[prop(into)] session: Signal<Session>) -> impl IntoView {
    view! {
        <Router>
            <main class="app-content">
                <Routes fallback=|| view! { <p class="alert alert--error">"Page not found"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=MY_ORDERS_PATH /> } />
                    <Route
                        path=path!("/orders/myOrders")
                        view=move || view! { <MyOrders session=session /> }
                    />
                    <Route
                        path=path!("/order/anonymous")
                        view=move || view! { <AnonymousOrder session=session /> }
                    />
                    <Route
                        path=path!("/orders/:id")
                        view=move || view! { <OrderDetailRoute session=session /> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
