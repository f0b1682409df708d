//! Notification Stack Component
//!
//! Renders the toast queue top-right.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::notify::Notification;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let center = ctx.notifier;

    view! {
        <div class="notification-stack">
            <For
                each=move || center.queue.with(|q| q.items().to_vec())
                key=|n: &Notification| (n.id, n.leaving)
                children=move |n: Notification| {
                    let id = n.id;
                    let class = if n.leaving {
                        format!("{} leaving", n.severity.alert_class())
                    } else {
                        n.severity.alert_class()
                    };
                    view! {
                        <div class=class role="alert">
                            <i class=format!("bi {} me-2", n.severity.icon())></i>
                            {n.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| center.dismiss(id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
