use crate::layout::Shell;
use crate::shared::resource_page::ResourcePage;
use crate::system::auth::guard::{RedirectIfAuthenticated, RequireAuth};
use crate::system::pages::login::LoginPage;
use contracts::domain::ResourceKind;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Guarded page of one resource inside the shell
#[component]
fn GuardedResource(resource: ResourceKind) -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <ResourcePage resource=resource />
            </Shell>
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="page__empty">"Page not found"</p> }>
                <Route
                    path=path!("/login")
                    view=|| view! { <RedirectIfAuthenticated><LoginPage /></RedirectIfAuthenticated> }
                />
                <Route path=path!("/") view=|| view! { <GuardedResource resource=ResourceKind::Product /> } />
                <Route path=path!("/category") view=|| view! { <GuardedResource resource=ResourceKind::Category /> } />
                <Route path=path!("/discount") view=|| view! { <GuardedResource resource=ResourceKind::Discount /> } />
                <Route path=path!("/sizes") view=|| view! { <GuardedResource resource=ResourceKind::Sizes /> } />
                <Route path=path!("/colors") view=|| view! { <GuardedResource resource=ResourceKind::Colors /> } />
                <Route path=path!("/faq") view=|| view! { <GuardedResource resource=ResourceKind::Faq /> } />
                <Route path=path!("/contact") view=|| view! { <GuardedResource resource=ResourceKind::Contact /> } />
                <Route path=path!("/team-members") view=|| view! { <GuardedResource resource=ResourceKind::Team /> } />
                <Route path=path!("/news") view=|| view! { <GuardedResource resource=ResourceKind::News /> } />
            </Routes>
        </Router>
    }
}
