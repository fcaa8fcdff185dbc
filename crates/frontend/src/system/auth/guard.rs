use contracts::system::auth::Session;
use leptos::prelude::*;

/// Component that requires an authenticated session
/// Shows fallback if no token is present
#[component]
pub fn RequireAuth(
    #[prop(into)] session: Signal<Session>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show
            when=move || session.with(|s| !s.is_anonymous())
            fallback=|| view! { <p class="alert alert--error">"User is not authenticated."</p> }
        >
            {children()}
        </Show>
    }
}
