//! Dashboard Page
//!
//! Statistics, recent analyses and categories. Cards can be duplicated or
//! deleted with an exit animation.

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::OrderedList;

use crate::actions::{navigate_after, reload_page, AnalysisActions, ListHandle};
use crate::animation::{shredder_pieces, DeleteAnimation, SHREDDER_PIECES};
use crate::api::routes;
use crate::components::{DeleteAnalysisModal, DeleteDialog, PendingDelete, StatCounter};
use crate::context::AppContext;
use crate::models::Analysis;
use crate::page::DashboardData;

/// Wait before opening the duplicated analysis
const DUPLICATE_REDIRECT_MS: u32 = 1500;

/// Wait before reloading once the last card is gone
const EMPTY_RELOAD_MS: u32 = 500;

#[component]
fn CardBody(analysis: Analysis) -> impl IntoView {
    view! {
        <div class="d-flex justify-content-between align-items-start mb-2">
            <h5 class="mb-0">{analysis.name.clone()}</h5>
            {analysis.category.clone().map(|c| view! { <span class="badge bg-primary">{c}</span> })}
        </div>
        {analysis.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
            <p class="text-muted small mb-2">{d}</p>
        })}
        <div class="d-flex justify-content-between text-muted small">
            <span>
                <i class="bi bi-box me-1"></i>
                {format!("{} objects", analysis.object_count.unwrap_or(0))}
            </span>
            {analysis.created_at.clone().map(|c| view! { <span>{c}</span> })}
        </div>
    }
}

#[component]
pub fn Dashboard(data: DashboardData) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let cards = RwSignal::new(OrderedList::new(data.recent_analyses));
    // Cards currently playing their delete animation
    let deleting = RwSignal::new(HashMap::<u32, DeleteAnimation>::new());
    let dialog = RwSignal::new(DeleteDialog::new(ctx.default_delete_animation()));

    let on_confirm_delete = Callback::new(move |(analysis_id, animation): (u32, DeleteAnimation)| {
        log::debug!("[DASHBOARD] Deleting analysis {} with {}", analysis_id, animation.as_str());
        deleting.update(|d| {
            d.insert(analysis_id, animation);
        });
        spawn_local(async move {
            TimeoutFuture::new(animation.duration_ms()).await;
            let api = ctx.api();
            let deleted = AnalysisActions::new(&api, &ctx.notifier).delete(analysis_id, &cards).await;
            deleting.try_update(|d| d.remove(&analysis_id));
            if deleted && cards.with_list(|l| l.is_empty()).unwrap_or(false) {
                Timeout::new(EMPTY_RELOAD_MS, reload_page).forget();
            }
        });
    });

    let duplicate = move |analysis_id: u32| {
        spawn_local(async move {
            let api = ctx.api();
            if let Some(new_id) = AnalysisActions::new(&api, &ctx.notifier).duplicate(analysis_id).await {
                navigate_after(routes::view(new_id), DUPLICATE_REDIRECT_MS);
            }
        });
    };

    let categories = data.categories;

    view! {
        <div class="container py-4 dashboard">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="gradient-text mb-0">"Dashboard"</h1>
                <button type="button" class="btn btn-primary" on:click=move |_| ctx.create_modal_open.set(true)>
                    <i class="bi bi-plus-lg me-1"></i>
                    "New Analysis"
                </button>
            </div>

            <div class="row g-3 mb-4">
                <div class="col-md-4">
                    <StatCounter target=data.total_analyses label="Analyses" icon="bi-clipboard-data" />
                </div>
                <div class="col-md-4">
                    <StatCounter target=data.total_objects label="Objects Compared" icon="bi-box" />
                </div>
                <div class="col-md-4">
                    <StatCounter target=categories.len() as u32 label="Categories" icon="bi-tags" />
                </div>
            </div>

            <div class="row g-4">
                <div class="col-lg-8">
                    <h4 class="mb-3">"Recent Analyses"</h4>
                    <Show
                        when=move || cards.with(|c| !c.is_empty())
                        fallback=move || view! {
                            <div class="glass-card p-5 text-center empty-state">
                                <i class="bi bi-clipboard-plus display-4 text-muted"></i>
                                <p class="mt-3">"No analyses yet. Create your first comparison!"</p>
                            </div>
                        }
                    >
                        <div class="row g-3">
                            <For
                                each=move || cards.with(|c| c.items().to_vec())
                                key=|a: &Analysis| a.id
                                children=move |analysis: Analysis| {
                                    let id = analysis.id;
                                    let name = analysis.name.clone();
                                    let animation = move || deleting.with(|d| d.get(&id).copied());
                                    let card_class = move || match animation() {
                                        Some(a) => format!("glass-card p-3 h-100 analysis-card {}", a.class()),
                                        None => "glass-card p-3 h-100 analysis-card".to_string(),
                                    };
                                    let pieces_source = analysis.clone();
                                    view! {
                                        <div class="col-md-6">
                                            <div class=card_class data-analysis-id=id.to_string()>
                                                <CardBody analysis=analysis.clone() />
                                                <div class="d-flex gap-2 mt-3">
                                                    <a class="btn btn-sm btn-primary" href=routes::view(id)>
                                                        <i class="bi bi-eye me-1"></i>"View"
                                                    </a>
                                                    <a class="btn btn-sm btn-outline-secondary" href=routes::setup(id)>
                                                        <i class="bi bi-gear me-1"></i>"Setup"
                                                    </a>
                                                    <button
                                                        type="button"
                                                        class="btn btn-sm btn-outline-info duplicate-analysis-btn"
                                                        on:click=move |_| duplicate(id)
                                                    >
                                                        <i class="bi bi-copy"></i>
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="btn btn-sm btn-outline-danger delete-analysis-btn"
                                                        disabled=move || animation().is_some()
                                                        on:click=move |_| dialog.update(|d| d.open(PendingDelete {
                                                            analysis_id: id,
                                                            name: name.clone(),
                                                        }))
                                                    >
                                                        <i class="bi bi-trash"></i>
                                                    </button>
                                                </div>
                                                <Show when=move || animation() == Some(DeleteAnimation::Shredder)>
                                                    {shredder_pieces(SHREDDER_PIECES)
                                                        .into_iter()
                                                        .map(|piece| view! {
                                                            <div
                                                                class=piece.class
                                                                style=format!("clip-path: {}; animation-delay: {}", piece.clip_path, piece.delay)
                                                            >
                                                                <CardBody analysis=pieces_source.clone() />
                                                            </div>
                                                        })
                                                        .collect_view()}
                                                </Show>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>

                <div class="col-lg-4">
                    <h4 class="mb-3">"Categories"</h4>
                    <div class="glass-card p-3">
                        {if categories.is_empty() {
                            view! { <p class="text-muted mb-0">"No categories yet."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="list-unstyled mb-0">
                                    {categories.iter().map(|c| view! {
                                        <li class="d-flex justify-content-between py-1">
                                            <span>{c.category.clone()}</span>
                                            <span class="badge bg-secondary">{c.count}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>

            <DeleteAnalysisModal
                dialog=dialog
                on_confirm=on_confirm_delete
            />
        </div>
    }
}
