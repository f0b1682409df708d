//! Analysis Setup Page
//!
//! Add fields (by hand or from category suggestions), reorder them by
//! dragging, delete them, and preview the resulting object form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{AnimatedList, FieldActions};
use crate::api::routes;
use crate::components::FieldList;
use crate::context::AppContext;
use crate::forms::{preview_label, preview_placeholder};
use crate::models::{Field, FieldDraft, FieldType};
use crate::page::SetupData;
use crate::suggestions::{self, Suggestion};

#[component]
fn SuggestionButtons(
    suggestions: &'static [Suggestion],
    #[prop(into)] on_pick: Callback<Suggestion>,
) -> impl IntoView {
    suggestions
        .iter()
        .map(|s| {
            let s = *s;
            view! {
                <button
                    type="button"
                    class="btn btn-outline-primary btn-sm me-2 mb-2 suggestion-btn"
                    on:click=move |_| on_pick.run(s)
                >
                    <i class="bi bi-plus me-1"></i>
                    {s.name}
                </button>
            }
        })
        .collect_view()
}

#[component]
fn FormPreview(fields: AnimatedList<Field>, open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop show" on:click=move |_| open.set(false)></div>
            <div class="modal d-block" tabindex="-1" id="previewModal">
                <div class="modal-dialog modal-lg modal-dialog-centered">
                    <div class="modal-content glass-card">
                        <div class="modal-header">
                            <h5 class="modal-title">"Form Preview"</h5>
                            <button type="button" class="btn-close" on:click=move |_| open.set(false)></button>
                        </div>
                        <div class="modal-body" id="formPreview">
                            {move || {
                                let items = fields.list.with(|l| l.items().to_vec());
                                if items.is_empty() {
                                    return view! {
                                        <p class="text-muted">"No fields to preview. Add some fields first."</p>
                                    }.into_any();
                                }
                                view! {
                                    <form class="preview-form" on:submit=|ev| ev.prevent_default()>
                                        <div class="row mb-3">
                                            <div class="col-md-6">
                                                <label class="form-label">"Object Name *"</label>
                                                <input type="text" class="form-control" placeholder="Enter object name" />
                                            </div>
                                            <div class="col-md-6">
                                                <label class="form-label">"Brand"</label>
                                                <input type="text" class="form-control" placeholder="Enter brand" />
                                            </div>
                                        </div>
                                        {items.into_iter().map(|f| view! {
                                            <div class="mb-3">
                                                <label class="form-label">{preview_label(&f.field_name, f.is_required, f.unit())}</label>
                                                <input type="text" class="form-control" placeholder=preview_placeholder(&f.field_name) />
                                            </div>
                                        }).collect_view()}
                                    </form>
                                }.into_any()
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn AnalysisSetup(data: SetupData) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let analysis_id = data.analysis.id;
    let category = data.analysis.category.clone();

    let fields = AnimatedList::new(data.fields, false);
    let preview_open = RwSignal::new(false);

    // Add-field form
    let draft = RwSignal::new(FieldDraft::default());
    let (adding, set_adding) = signal(false);
    let show_unit = move || draft.with(|d| d.field_type.has_unit());

    let fill_from = Callback::new(move |s: Suggestion| draft.set(s.to_draft()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if adding.get_untracked() {
            return;
        }
        let submitted = draft.get_untracked();
        set_adding.set(true);
        spawn_local(async move {
            let api = ctx.api();
            let added = FieldActions::new(analysis_id, &api, &ctx.notifier, &fields).add(&submitted).await;
            set_adding.set(false);
            if added.is_some() {
                draft.set(FieldDraft::default());
            }
        });
    };

    let all_suggestions = suggestions::for_category(category.as_deref());
    let quick = suggestions::quick_picks(category.as_deref());

    view! {
        <div class="container py-4 analysis-setup">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <div>
                    <h1 class="gradient-text mb-1">{data.analysis.name.clone()}</h1>
                    <p class="text-muted mb-0">{category.clone().unwrap_or_default()}</p>
                </div>
                <div class="d-flex gap-2">
                    <button type="button" id="previewBtn" class="btn btn-outline-secondary" on:click=move |_| preview_open.set(true)>
                        <i class="bi bi-eye me-1"></i>"Preview Form"
                    </button>
                    <a class="btn btn-primary" href=routes::view(analysis_id)>
                        <i class="bi bi-arrow-right me-1"></i>"Go to Analysis"
                    </a>
                </div>
            </div>

            <div class="row g-4">
                <div class="col-lg-5">
                    <div class="glass-card p-4 mb-4">
                        <h4 class="mb-3">"Add Field"</h4>
                        <form id="fieldForm" on:submit=on_submit>
                            <div class="mb-3">
                                <label class="form-label" for="fieldName">"Field Name *"</label>
                                <input
                                    id="fieldName"
                                    class="form-control"
                                    name="field_name"
                                    placeholder="e.g. Battery Life"
                                    prop:value=move || draft.with(|d| d.field_name.clone())
                                    on:input=move |ev| draft.update(|d| d.field_name = event_target_value(&ev))
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="fieldType">"Field Type"</label>
                                <select
                                    id="fieldType"
                                    class="form-select"
                                    name="field_type"
                                    prop:value=move || draft.with(|d| d.field_type.as_str())
                                    on:change=move |ev| draft.update(|d| d.field_type = FieldType::parse(&event_target_value(&ev)))
                                >
                                    {FieldType::ALL.iter().map(|t| view! {
                                        <option value=t.as_str()>{t.label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <Show when=show_unit>
                                <div class="mb-3" id="unitSection">
                                    <label class="form-label" for="fieldUnit">"Unit"</label>
                                    <input
                                        id="fieldUnit"
                                        class="form-control"
                                        name="field_unit"
                                        placeholder="e.g. $, GB, inches"
                                        prop:value=move || draft.with(|d| d.field_unit.clone())
                                        on:input=move |ev| draft.update(|d| d.field_unit = event_target_value(&ev))
                                    />
                                </div>
                            </Show>
                            <div class="form-check mb-3">
                                <input
                                    id="isRequired"
                                    class="form-check-input"
                                    type="checkbox"
                                    name="is_required"
                                    prop:checked=move || draft.with(|d| d.is_required)
                                    on:change=move |ev| draft.update(|d| d.is_required = event_target_checked(&ev))
                                />
                                <label class="form-check-label" for="isRequired">"Required"</label>
                            </div>
                            <button type="submit" class="btn btn-primary w-100" disabled=move || adding.get()>
                                <i class="bi bi-plus-lg me-1"></i>
                                {move || if adding.get() { "Adding..." } else { "Add Field" }}
                            </button>
                        </form>
                        <div class="mt-3">
                            <small class="text-muted d-block mb-2">"Quick add:"</small>
                            <div id="quickSuggestions">
                                <SuggestionButtons suggestions=quick on_pick=fill_from />
                            </div>
                        </div>
                    </div>

                    <div class="glass-card p-4">
                        <h5 class="mb-3">"Suggested Fields"</h5>
                        <div id="fieldSuggestions">
                            <SuggestionButtons suggestions=all_suggestions on_pick=fill_from />
                        </div>
                    </div>
                </div>

                <div class="col-lg-7">
                    <h4 class="mb-3">
                        "Fields "
                        <span class="badge bg-secondary">{move || fields.list.with(|l| l.len())}</span>
                    </h4>
                    <p class="text-muted small">"Drag fields to change their order."</p>
                    <FieldList analysis_id=analysis_id fields=fields />
                </div>
            </div>

            <FormPreview fields=fields open=preview_open />
        </div>
    }
}
