use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Renders children only with a session; otherwise redirects to login
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let authenticated = use_session().is_authenticated();

    view! {
        <Show
            when=move || authenticated.get()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Inverse guard for the login page
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let authenticated = use_session().is_authenticated();

    view! {
        <Show
            when=move || !authenticated.get()
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
