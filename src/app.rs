//! Compare Hub Frontend App
//!
//! Shell shared by every page: navbar, notifications, the create-analysis
//! modal and the global shortcuts. The page body comes from the payload.

use leptos::prelude::*;

use crate::components::{CreateAnalysisModal, NotificationStack, ThemeToggle};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::UiResult;
use crate::notify::Notifier;
use crate::page::{PageData, PagePayload};
use crate::pages::{AnalysisSetup, AnalysisView, Dashboard, ObjectForm};
use crate::shortcuts;

#[component]
fn PageBody(page: PageData) -> impl IntoView {
    match page {
        PageData::Dashboard(data) => view! { <Dashboard data=data /> }.into_any(),
        PageData::AnalysisSetup(data) => view! { <AnalysisSetup data=data /> }.into_any(),
        PageData::AnalysisView(data) => view! { <AnalysisView data=data /> }.into_any(),
        PageData::ObjectForm(data) => view! { <ObjectForm data=data /> }.into_any(),
    }
}

#[component]
pub fn App(config: AppConfig, payload: UiResult<PagePayload>) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    shortcuts::bind_global(move |shortcut| {
        let handled = shortcuts::opens_new_analysis(shortcut);
        if handled {
            ctx.create_modal_open.set(true);
        }
        handled
    });

    let body = match payload {
        Ok(payload) => {
            log::info!("[APP] Mounting {} page", payload.page.name());
            for flash in &payload.flashes {
                ctx.notifier.notify(&flash.message, flash.category, None);
            }
            view! { <PageBody page=payload.page /> }.into_any()
        }
        Err(e) => {
            log::error!("[APP] Could not load page data: {}", e);
            view! {
                <div class="container py-5">
                    <div class="alert alert-danger">
                        <i class="bi bi-exclamation-triangle me-2"></i>
                        {format!("This page could not be loaded: {}", e.message())}
                    </div>
                    <a class="btn btn-primary" href="/">"Back to Dashboard"</a>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <nav class="navbar navbar-expand glass-nav px-3">
            <a class="navbar-brand gradient-text fw-bold" href="/">
                <i class="bi bi-bar-chart-steps me-2"></i>"Compare Hub"
            </a>
            <div class="ms-auto d-flex align-items-center gap-2">
                <button
                    type="button"
                    class="btn btn-sm btn-primary"
                    title="New analysis (Ctrl+N)"
                    on:click=move |_| ctx.create_modal_open.set(true)
                >
                    <i class="bi bi-plus-lg me-1"></i>"New Analysis"
                </button>
                <ThemeToggle />
            </div>
        </nav>

        <main>{body}</main>

        <NotificationStack />
        <CreateAnalysisModal />
    }
}
