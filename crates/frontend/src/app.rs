use crate::routes::AppRoutes;
use crate::system::auth::storage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session is read once; the login page owns writing it.
    let session = RwSignal::new(storage::read_session());

    view! {
        <AppRoutes session=session />
    }
}
