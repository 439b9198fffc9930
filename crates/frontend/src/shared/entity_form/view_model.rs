//! ViewModel for the entity form modal
//!
//! Holds the draft (browser `File`s included, hence local storage), the
//! staging pairs of key/value fields, loaded options and the modal phase.

use super::model;
use crate::shared::api_utils::ApiClient;
use crate::shared::toast::ToastService;
use crate::system::auth::context::SessionContext;
use contracts::domain::ResourceKind;
use contracts::shared::form::{
    prepare_submission, EntityDraft, FormPhase, OptionsMap, PairStaging, SelectOption,
    SubmitMode,
};
use contracts::shared::metadata::{EntitySchema, FieldWidget};
use contracts::shared::record::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct EntityFormVm {
    pub schema: &'static EntitySchema,
    pub mode: SubmitMode,
    pub draft: RwSignal<EntityDraft<File>, LocalStorage>,
    pub staging: RwSignal<BTreeMap<&'static str, PairStaging>>,
    pub options: RwSignal<OptionsMap>,
    pub phase: RwSignal<FormPhase>,
    pub error: RwSignal<Option<String>>,
}

impl EntityFormVm {
    /// Form for a new record, or for editing `record`
    pub fn new(resource: ResourceKind, record: Option<&Record>) -> Self {
        let schema = resource.schema();
        let mode = record
            .and_then(Record::id)
            .map(SubmitMode::Update)
            .unwrap_or(SubmitMode::Create);
        let draft = match record {
            Some(record) => EntityDraft::from_record(schema, record),
            None => EntityDraft::empty(schema),
        };
        let staging = schema
            .fields
            .iter()
            .filter(|f| f.widget == FieldWidget::KeyValue)
            .map(|f| (f.name, PairStaging::default()))
            .collect();

        Self {
            schema,
            mode,
            draft: RwSignal::new_local(draft),
            staging: RwSignal::new(staging),
            options: RwSignal::new(OptionsMap::new()),
            phase: RwSignal::new(FormPhase::open(!schema.references().is_empty())),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.mode.is_edit()
    }

    pub fn title(&self) -> String {
        if self.is_edit() {
            format!("Edit {}", self.schema.element_name)
        } else {
            format!("Add {}", self.schema.element_name)
        }
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.get().is_busy())
    }

    pub fn options_for(&self, resource: ResourceKind) -> Vec<SelectOption> {
        self.options
            .with(|o| o.get(&resource).cloned().unwrap_or_default())
    }

    pub fn staged(&self, field: &'static str) -> PairStaging {
        self.staging
            .with(|s| s.get(field).cloned().unwrap_or_default())
    }

    pub fn set_staged_key(&self, field: &'static str, key: String) {
        self.staging.update(|s| s.entry(field).or_default().key = key);
    }

    pub fn set_staged_value(&self, field: &'static str, value: String) {
        self.staging
            .update(|s| s.entry(field).or_default().value = value);
    }

    /// Moves the staged pair of `field` into the draft
    pub fn commit_pair(&self, field: &'static str) -> bool {
        let mut staged = self
            .staging
            .with_untracked(|s| s.get(field).cloned().unwrap_or_default());
        let committed = self
            .draft
            .try_update(|d| staged.commit(d, field))
            .unwrap_or(false);
        if committed {
            self.staging.update(|s| {
                s.insert(field, staged);
            });
        }
        committed
    }

    /// Loads select/checkbox options; on failure the form opens with empty lists
    pub fn load_references(&self, api: ApiClient, session: SessionContext, toasts: ToastService) {
        if self.phase.get_untracked() != FormPhase::LoadingReferences {
            return;
        }
        let this = *self;
        let sources = self.schema.references();
        let token = session.token();

        spawn_local(async move {
            match model::fetch_references(api, sources, token).await {
                Ok(options) => this.options.set(options),
                Err(e) => {
                    log::error!("Failed to fetch form data: {}", e);
                    toasts.error("Failed to fetch form data");
                    this.options.set(OptionsMap::new());
                }
            }
            this.phase.update(|p| *p = p.references_loaded());
        });
    }

    /// Validates and sends the draft. `on_saved` refreshes the caller's list,
    /// `on_close` dismisses the modal; both run only on success.
    pub fn submit(
        &self,
        api: ApiClient,
        session: SessionContext,
        toasts: ToastService,
        on_saved: Callback<()>,
        on_close: Callback<()>,
    ) {
        let Some(submitting) = self.phase.get_untracked().begin_submit() else {
            return;
        };

        let token = session.token();
        let prepared = self.draft.with_untracked(|draft| {
            prepare_submission(self.schema, draft, self.mode, token.as_deref())
        });
        let request = match prepared {
            Ok(request) => request,
            Err(e) => {
                let message = e.to_string();
                self.error.set(Some(message.clone()));
                toasts.error(message);
                return;
            }
        };

        self.error.set(None);
        self.phase.set(submitting);

        let this = *self;
        spawn_local(async move {
            match model::submit(api, this.mode, request).await {
                Ok(()) => {
                    let verb = if this.is_edit() { "updated" } else { "added" };
                    toasts.success(format!("{} {} successfully", this.schema.element_name, verb));
                    on_saved.run(());
                    this.draft.set(EntityDraft::empty(this.schema));
                    this.phase.update(|p| *p = p.submit_finished(true));
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Failed to save {}: {}", this.schema.element_name, e);
                    if e.is_unauthorized() {
                        session.clear();
                    }
                    let action = if this.is_edit() { "update" } else { "add" };
                    let fallback = format!(
                        "Failed to {} {}",
                        action,
                        this.schema.element_name.to_lowercase()
                    );
                    toasts.error(e.user_message(&fallback));
                    this.phase.update(|p| *p = p.submit_finished(false));
                }
            }
        });
    }
}
