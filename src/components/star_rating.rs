use leptos::prelude::*;

use crate::forms::{parse_rating, star_look};
use crate::table_sort::MAX_STARS;

/// Clickable 1-5 star input backed by a hidden form field.
/// Hover previews, leaving restores the chosen value.
#[component]
pub fn StarRating(
    #[prop(into)] name: String,
    #[prop(into)] initial: String,
    #[prop(optional)] required: bool,
    /// Called with the new stored value after a click
    #[prop(optional)]
    on_change: Option<Callback<String>>,
) -> impl IntoView {
    let (rating, set_rating) = signal(parse_rating(&initial));
    let (hover, set_hover) = signal(None::<usize>);

    view! {
        <div class="rating-input" on:mouseleave=move |_| set_hover.set(None)>
            {(0..MAX_STARS)
                .map(|i| {
                    let look = move || {
                        let (shown, hovering) = match hover.get() {
                            Some(h) => (h, true),
                            None => (rating.get(), false),
                        };
                        star_look(i, shown, hovering)
                    };
                    view! {
                        <i
                            class=move || look().0
                            style=move || format!("color: {}; cursor: pointer", look().1)
                            on:click=move |_| {
                                set_rating.set(i + 1);
                                if let Some(cb) = on_change {
                                    cb.run((i + 1).to_string());
                                }
                            }
                            on:mouseover=move |_| set_hover.set(Some(i + 1))
                        ></i>
                    }
                })
                .collect_view()}
            <input
                type="hidden"
                name=name
                required=required
                prop:value=move || {
                    let r = rating.get();
                    if r == 0 { String::new() } else { r.to_string() }
                }
            />
        </div>
    }
}
