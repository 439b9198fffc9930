pub mod sidebar;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |                    [Log Out] |
/// |  Sidebar  |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-main">
                <div class="app-main__top">
                    <button
                        class="button button--danger"
                        on:click=move |_| {
                            log::info!("logging out");
                            session.clear();
                        }
                    >
                        {icon("logout")}
                        "Log Out"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
