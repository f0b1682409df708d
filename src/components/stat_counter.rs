use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::animation::CounterAnimation;

/// Dashboard statistic counting up from zero
#[component]
pub fn StatCounter(target: u32, #[prop(into)] label: String, #[prop(into)] icon: String) -> impl IntoView {
    let value = RwSignal::new(0u32);
    let counter = CounterAnimation::new(target);

    spawn_local(async move {
        for step in 1..=counter.steps {
            TimeoutFuture::new(counter.interval_ms()).await;
            // stop if the page went away
            if value.try_set(counter.value_at(step)).is_some() {
                break;
            }
        }
    });

    view! {
        <div class="stat-card glass-card p-4 text-center">
            <i class=format!("bi {} display-6 mb-2", icon)></i>
            <h2 class="counter mb-0" data-target=target.to_string()>{move || value.get()}</h2>
            <p class="text-muted mb-0">{label}</p>
        </div>
    }
}
