//! Analysis View Page
//!
//! Compares the objects of one analysis as a sortable table, as cards or
//! as a chart. Ctrl/Cmd+1/2/3 switch between the views.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{open_in_new_tab, AnimatedList};
use crate::api::routes;
use crate::components::{ChartView, ComparisonTable, ObjectCards};
use crate::context::AppContext;
use crate::notify::Notifier;
use crate::page::ViewData;
use crate::share;
use crate::shortcuts::{self, ViewMode};

#[component]
pub fn AnalysisView(data: ViewData) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let analysis = data.analysis;
    let analysis_id = analysis.id;

    let fields = StoredValue::new(data.fields);
    let objects = AnimatedList::new(data.objects, true);
    let mode = RwSignal::new(ViewMode::default());

    shortcuts::bind_global(move |shortcut| match shortcuts::view_switch(shortcut) {
        Some(next) => {
            log::debug!("[VIEW] Switching to {}", next.label());
            mode.set(next);
            true
        }
        None => false,
    });

    let on_share = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            let outcome = share::share_analysis(analysis_id).await;
            if let Some((message, severity)) = outcome.notification() {
                ctx.notifier.notify(&message, severity, None);
            }
        });
    };

    let has_objects = move || objects.list.with(|l| !l.is_empty());
    let has_fields = fields.with_value(|f| !f.is_empty());

    view! {
        <div class="container-fluid py-4 analysis-view">
            <div class="d-flex flex-wrap justify-content-between align-items-center gap-2 mb-4">
                <div>
                    <h1 class="gradient-text mb-1">{analysis.name.clone()}</h1>
                    {analysis.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                        <p class="text-muted mb-0">{d}</p>
                    })}
                </div>
                <div class="d-flex gap-2">
                    <div class="btn-group" role="group">
                        {ViewMode::ALL.iter().map(|m| {
                            let m = *m;
                            view! {
                                <button
                                    type="button"
                                    class=move || if mode.get() == m { "btn btn-primary" } else { "btn btn-outline-primary" }
                                    title=format!("{} view", m.label())
                                    on:click=move |_| mode.set(m)
                                >
                                    <i class=format!("{} me-1", m.icon())></i>
                                    {m.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                    <a class="btn btn-outline-secondary" href=routes::setup(analysis_id)>
                        <i class="bi bi-gear me-1"></i>"Setup"
                    </a>
                    <button
                        type="button"
                        class="btn btn-outline-success"
                        on:click=move |_| open_in_new_tab(&routes::export(analysis_id))
                    >
                        <i class="bi bi-download me-1"></i>"Export"
                    </button>
                    <button type="button" class="btn btn-outline-info" on:click=on_share>
                        <i class="bi bi-share me-1"></i>"Share"
                    </button>
                    <a class="btn btn-primary" href=routes::new_object(analysis_id)>
                        <i class="bi bi-plus-lg me-1"></i>"Add Object"
                    </a>
                </div>
            </div>

            {(!has_fields).then(|| view! {
                <div class="alert alert-info">
                    "This analysis has no fields yet. "
                    <a href=routes::setup(analysis_id)>"Set up fields"</a>
                    " to start comparing."
                </div>
            })}

            <Show
                when=has_objects
                fallback=move || view! {
                    <div class="glass-card p-5 text-center empty-state">
                        <i class="bi bi-box display-4 text-muted"></i>
                        <p class="mt-3">"No objects to compare yet."</p>
                        <a class="btn btn-primary" href=routes::new_object(analysis_id)>"Add the first object"</a>
                    </div>
                }
            >
                {move || match mode.get() {
                    ViewMode::Table => view! {
                        <ComparisonTable analysis_id=analysis_id fields=fields objects=objects />
                    }.into_any(),
                    ViewMode::Card => view! { <ObjectCards fields=fields objects=objects /> }.into_any(),
                    ViewMode::Chart => view! { <ChartView fields=fields objects=objects /> }.into_any(),
                }}
            </Show>
        </div>
    }
}
