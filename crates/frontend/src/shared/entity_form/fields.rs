use super::view_model::EntityFormVm;
use contracts::shared::metadata::{FieldSpec, FieldWidget};
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

/// One labelled input, chosen by the field's widget
#[component]
pub fn FormField(vm: EntityFormVm, field: &'static FieldSpec) -> impl IntoView {
    let name = field.name;
    let label = field.label;
    let placeholder = field.placeholder.unwrap_or(field.label);
    let rules = field.validation;
    let busy = vm.is_busy();

    let input = match field.widget {
        FieldWidget::Text | FieldWidget::Number | FieldWidget::Date => {
            let input_type = match field.widget {
                FieldWidget::Number => "number",
                FieldWidget::Date => "date",
                _ => "text",
            };
            let step = (field.widget == FieldWidget::Number)
                .then(|| if rules.integer { "1" } else { "any" });
            view! {
                <input
                    class="form__input"
                    type=input_type
                    step=step
                    min=rules.min.map(|m| m.to_string())
                    max=rules.max.map(|m| m.to_string())
                    maxlength=rules.max_length.map(|m| m.to_string())
                    placeholder=placeholder
                    required=rules.required
                    prop:value=move || vm.draft.with(|d| d.text(name).to_string())
                    on:input=move |ev| vm.draft.update(|d| d.set_text(name, event_target_value(&ev)))
                    disabled=move || busy.get()
                />
            }
            .into_any()
        }
        FieldWidget::TextArea => view! {
            <textarea
                class="form__textarea"
                maxlength=rules.max_length.map(|m| m.to_string())
                placeholder=placeholder
                required=rules.required
                prop:value=move || vm.draft.with(|d| d.text(name).to_string())
                on:input=move |ev| vm.draft.update(|d| d.set_text(name, event_target_value(&ev)))
                disabled=move || busy.get()
            ></textarea>
        }
        .into_any(),
        FieldWidget::Toggle => view! {
            <input
                class="form__checkbox"
                type="checkbox"
                prop:checked=move || vm.draft.with(|d| d.flag(name))
                on:change=move |ev| vm.draft.update(|d| d.set_flag(name, event_target_checked(&ev)))
                disabled=move || busy.get()
            />
        }
        .into_any(),
        FieldWidget::Select(source) => view! {
            <select
                class="form__select"
                on:change=move |ev| vm.draft.update(|d| d.set_text(name, event_target_value(&ev)))
                disabled=move || busy.get()
            >
                <option value="">{placeholder}</option>
                {move || {
                    vm.options_for(source.resource)
                        .into_iter()
                        .map(|option| {
                            let value = option.id.to_string();
                            let current = value.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || vm.draft.with(|d| d.text(name) == current)
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        FieldWidget::CheckboxSet(source) => view! {
            <div class="form__checkboxes">
                {move || {
                    vm.options_for(source.resource)
                        .into_iter()
                        .map(|option| {
                            let id = option.id;
                            view! {
                                <label class="form__checkbox-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || vm.draft.with(|d| d.contains_id(name, id))
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            vm.draft.update(|d| d.toggle_id(name, id, checked));
                                        }
                                        disabled=move || busy.get()
                                    />
                                    {option.label}
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </div>
        }
        .into_any(),
        FieldWidget::KeyValue => view! {
            <div class="form__pairs">
                <div class="form__pair-inputs">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Key"
                        prop:value=move || vm.staged(name).key
                        on:input=move |ev| vm.set_staged_key(name, event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Value"
                        prop:value=move || vm.staged(name).value
                        on:input=move |ev| vm.set_staged_value(name, event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| {
                            vm.commit_pair(name);
                        }
                        disabled=move || busy.get()
                    >
                        "Add"
                    </button>
                </div>
                <ul class="form__pair-list">
                    {move || {
                        vm.draft
                            .with(|d| d.pairs(name).cloned().unwrap_or_default())
                            .into_iter()
                            .map(|(key, value)| view! { <li>{format!("{}: {}", key, value)}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>
        }
        .into_any(),
        FieldWidget::Files { multiple, accept } => view! {
            <div class="form__files">
                <input
                    class="form__input"
                    type="file"
                    multiple=multiple
                    accept=accept
                    on:change=move |ev| {
                        let files = selected_files(&event_target::<HtmlInputElement>(&ev));
                        vm.draft.update(|d| d.replace_files(name, files));
                    }
                    disabled=move || busy.get()
                />
                <span class="form__hint">
                    {move || {
                        let count = vm.draft.with(|d| d.files(name).len());
                        if count == 0 { String::new() } else { format!("{} file(s) selected", count) }
                    }}
                </span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {rules.required.then_some(" *")}
            </label>
            {input}
        </div>
    }
}

fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
