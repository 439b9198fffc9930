//! Create/edit modal shared by every resource

pub mod fields;
pub mod model;
pub mod view_model;

use crate::shared::api_utils::use_api;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use contracts::domain::ResourceKind;
use contracts::shared::form::FormPhase;
use contracts::shared::record::Record;
use fields::FormField;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};
use view_model::EntityFormVm;

#[component]
pub fn EntityFormModal(
    resource: ResourceKind,
    /// Record to edit; `None` creates a new one
    record: Option<Record>,
    on_close: Callback<()>,
    /// Runs after a successful save, before the modal closes
    on_saved: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();

    let vm = EntityFormVm::new(resource, record.as_ref());
    vm.load_references(api, session, toasts);

    let busy = vm.is_busy();
    let editing = vm.is_edit();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(api, session, toasts, on_saved, on_close);
    };

    view! {
        <Modal title=vm.title() on_close=on_close>
            <Show when=move || vm.phase.get() == FormPhase::LoadingReferences>
                <div class="form__loading">
                    <Spinner />
                </div>
            </Show>
            <form class="form" on:submit=on_submit>
                {vm.schema
                    .fields
                    .iter()
                    .map(|field| view! { <FormField vm=vm field=field /> })
                    .collect_view()}

                {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

                <div class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <button type="submit" class="button button--primary" disabled=move || busy.get()>
                        {move || vm.phase.get().submit_label(editing)}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
