use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiClient;
use crate::shared::config::console_config;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = console_config();

    let session = SessionContext::browser();
    session.listen_cross_tab();

    provide_context(ToastService::new(config.notifications.timeout_ms));
    provide_context(ApiClient::new(config));
    provide_context(session);

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
