use leptos::prelude::*;

use crate::context::AppContext;

/// Navbar button switching between dark and light
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <button
            type="button"
            class="btn btn-outline-secondary theme-toggle"
            title="Toggle theme"
            on:click=move |_| ctx.toggle_theme()
        >
            <i id="theme-icon" class=move || ctx.theme.get().icon_class()></i>
        </button>
    }
}
