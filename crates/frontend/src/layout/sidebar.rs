use crate::shared::icons::resource_icon;
use contracts::domain::ResourceKind;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar">
            <div class="app-sidebar__content">
                {ResourceKind::ALL
                    .into_iter()
                    .map(|resource| {
                        view! {
                            <A href=resource.route() attr:class="app-sidebar__item">
                                <div class="app-sidebar__item-content">
                                    {resource_icon(resource)}
                                    <span>{resource.nav_label()}</span>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
