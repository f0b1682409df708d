//! Create Analysis Modal Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{navigate_after, AnalysisActions};
use crate::api::routes;
use crate::context::AppContext;
use crate::models::AnalysisDraft;
use crate::suggestions::{category_options, CATEGORIES};

/// Delay before jumping to the new analysis' setup page
const REDIRECT_MS: u32 = 1000;

#[component]
pub fn CreateAnalysisModal() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let open = ctx.create_modal_open;

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(CATEGORIES[0].to_string());
    let (creating, set_creating) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if creating.get_untracked() {
            return;
        }
        let draft = AnalysisDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
        };
        set_creating.set(true);
        spawn_local(async move {
            let api = ctx.api();
            let created = AnalysisActions::new(&api, &ctx.notifier).create(&draft).await;
            set_creating.set(false);
            if let Some(id) = created {
                open.set(false);
                navigate_after(routes::setup(id), REDIRECT_MS);
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop show" on:click=move |_| open.set(false)></div>
            <div class="modal d-block" tabindex="-1" id="createAnalysisModal">
                <div class="modal-dialog modal-dialog-centered">
                    <form class="modal-content glass-card" id="createAnalysisForm" on:submit=on_submit>
                        <div class="modal-header">
                            <h5 class="modal-title">"New Analysis"</h5>
                            <button type="button" class="btn-close" on:click=move |_| open.set(false)></button>
                        </div>
                        <div class="modal-body">
                            <div class="mb-3">
                                <label class="form-label" for="analysisName">"Name *"</label>
                                <input
                                    id="analysisName"
                                    class="form-control"
                                    name="name"
                                    required
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="analysisDescription">"Description"</label>
                                <textarea
                                    id="analysisDescription"
                                    class="form-control"
                                    name="description"
                                    rows="3"
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <div class="mb-3">
                                <label class="form-label" for="analysisCategory">"Category"</label>
                                <select
                                    id="analysisCategory"
                                    class="form-select"
                                    name="category"
                                    prop:value=move || category.get()
                                    on:change=move |ev| set_category.set(event_target_value(&ev))
                                >
                                    {move || category.with(|current| {
                                        category_options(current)
                                            .map(|(c, selected)| view! { <option value=c selected=selected>{c}</option> })
                                            .collect_view()
                                    })}
                                </select>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=move |_| open.set(false)>"Cancel"</button>
                            <button type="submit" class="btn btn-primary" disabled=move || creating.get()>
                                {move || if creating.get() {
                                    view! { <span class="loading-spinner me-2"></span>"Creating..." }.into_any()
                                } else {
                                    view! { <i class="bi bi-plus-lg me-1"></i>"Create Analysis" }.into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
