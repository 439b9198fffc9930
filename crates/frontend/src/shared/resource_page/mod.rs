//! Generic list + CRUD page
//!
//! One component serves every resource: the schema supplies the columns and
//! the form, the resource kind supplies the endpoints.

pub mod state;

use crate::shared::api_utils::{use_api, ApiClient};
use crate::shared::entity_form::EntityFormModal;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use contracts::domain::ResourceKind;
use contracts::shared::metadata::CellValue;
use contracts::shared::record::Record;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use state::ListState;
use thaw::{Button, ButtonAppearance, Spinner};

#[component]
pub fn ResourcePage(resource: ResourceKind) -> impl IntoView {
    let schema = resource.schema();
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let state = RwSignal::new(ListState::default());

    let fetch = move || {
        let token = session.token();
        spawn_local(async move {
            match api.fetch_list(resource, token).await {
                Ok(records) => {
                    log::debug!("loaded {} {}", records.len(), schema.list_name);
                    state.update(|s| s.set_records(records));
                }
                Err(e) if e.is_unauthorized() => {
                    log::warn!("{} list rejected the session", schema.list_name);
                    session.clear();
                }
                Err(e) => {
                    log::error!("Failed to fetch {}: {}", schema.list_name, e);
                    toasts.error(format!("Failed to fetch {}", schema.list_name));
                    state.update(|s| s.mark_loaded());
                }
            }
        });
    };

    let confirm_delete = move || {
        let Some(id) = state.try_update(|s| s.confirm_delete()).flatten() else {
            return;
        };
        let token = session.token();
        spawn_local(async move {
            match api.delete(resource, id, token).await {
                Ok(()) => toasts.success(format!("{} deleted successfully", schema.element_name)),
                Err(e) => {
                    log::error!("Failed to delete {} {}: {}", schema.element_name, id, e);
                    if e.is_unauthorized() {
                        session.clear();
                    }
                    let fallback = format!("Failed to delete {}", schema.element_name.to_lowercase());
                    toasts.error(e.user_message(&fallback));
                }
            }
            state.update(|s| s.finish_delete());
            fetch();
        });
    };

    let on_form_close = Callback::new(move |_| state.update(|s| s.close_form()));
    let on_form_saved = Callback::new(move |_| fetch());

    // Memos keep the dialogs mounted while the list itself re-renders
    let form_target = Memo::new(move |_| state.with(|s| s.form.clone()));
    let pending_delete = Memo::new(move |_| state.with(|s| s.pending_delete));
    let is_deleting = Signal::derive(move || state.with(|s| s.is_deleting));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{resource.nav_label()}</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.update(|s| s.open_create())
                    >
                        {icon("plus")}
                        {format!("Add {}", schema.element_name)}
                    </Button>
                </div>
            </div>

            {move || {
                if !state.with(|s| s.is_loaded) {
                    view! {
                        <div class="page__loading">
                            <Spinner />
                            <span>"Loading..."</span>
                        </div>
                    }
                    .into_any()
                } else if state.with(|s| s.is_empty()) {
                    view! {
                        <div class="page__empty">
                            {icon("inbox")}
                            <p>"No Data Available"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"№"</th>
                                        {schema
                                            .columns
                                            .iter()
                                            .map(|column| view! { <th class="table__header-cell">{column.header}</th> })
                                            .collect_view()}
                                        <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {state
                                        .with(|s| s.records.clone())
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, record)| {
                                            view! {
                                                <ResourceRow
                                                    resource=resource
                                                    index=index
                                                    record=record
                                                    on_edit=Callback::new(move |record: Record| state.update(|s| s.open_edit(record)))
                                                    on_delete=Callback::new(move |id: i64| state.update(|s| s.request_delete(id)))
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            }}

            {move || {
                form_target.get().map(|target| {
                    view! {
                        <EntityFormModal
                            resource=resource
                            record=target.record()
                            on_close=on_form_close
                            on_saved=on_form_saved
                        />
                    }
                })
            }}

            {move || {
                pending_delete.get().map(|_| {
                    view! {
                        <Modal
                            title=format!("Delete {}", schema.element_name)
                            on_close=Callback::new(move |_| state.update(|s| s.cancel_delete()))
                        >
                            <p>{format!("Are you sure you want to delete this {}?", schema.element_name.to_lowercase())}</p>
                            <div class="form__actions">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    disabled=is_deleting
                                    on_click=move |_| state.update(|s| s.cancel_delete())
                                >
                                    "Cancel"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=is_deleting
                                    on_click=move |_| confirm_delete()
                                >
                                    {move || if is_deleting.get() { "Deleting..." } else { "Delete" }}
                                </Button>
                            </div>
                        </Modal>
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ResourceRow(
    resource: ResourceKind,
    index: usize,
    record: Record,
    on_edit: Callback<Record>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let api = use_api();
    let id = record.id();
    let cells = resource
        .schema()
        .columns
        .iter()
        .map(|column| {
            let cell = column.evaluate(&record);
            view! { <td class="table__cell">{render_cell(cell, api)}</td> }
        })
        .collect_view();
    let record = StoredValue::new(record);

    view! {
        <tr class="table__row">
            <td class="table__cell">{index + 1}</td>
            {cells}
            <td class="table__cell table__cell--actions">
                <button class="button button--secondary" on:click=move |_| on_edit.run(record.get_value())>
                    {icon("edit")}
                    "Edit"
                </button>
                <button
                    class="button button--danger"
                    disabled=id.is_none()
                    on:click=move |_| {
                        if let Some(id) = id {
                            on_delete.run(id);
                        }
                    }
                >
                    {icon("delete")}
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

fn render_cell(cell: CellValue, api: ApiClient) -> AnyView {
    match cell {
        CellValue::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellValue::Image(path) => {
            view! { <img class="table__image" src=api.media_url(&path) alt="" /> }.into_any()
        }
        CellValue::Lines(lines) => lines
            .into_iter()
            .map(|line| view! { <div>{line}</div> })
            .collect_view()
            .into_any(),
        CellValue::Placeholder(text) => view! { <span class="text-muted">{text}</span> }.into_any(),
    }
}
