//! Chart View Component
//!
//! Inline SVG bar/line chart of one field across all objects.

use leptos::prelude::*;

use crate::actions::AnimatedList;
use crate::chart::{self, ChartKind, ChartLayout};
use crate::models::{ComparedObject, Field};

const TICKS: usize = 5;

fn px(v: f64) -> String {
    format!("{:.1}", v)
}

#[component]
pub fn ChartView(fields: StoredValue<Vec<Field>>, objects: AnimatedList<ComparedObject>) -> impl IntoView {
    // Numeric fields first; fall back to the first field of any type
    let initial = fields.with_value(|f| {
        f.iter()
            .position(|field| field.field_type.is_numeric())
            .unwrap_or(0)
    });
    let (selected, set_selected) = signal(initial);
    let (kind, set_kind) = signal(ChartKind::Bar);
    let layout = ChartLayout::default();

    let series = move || {
        let index = selected.get();
        let field = fields.with_value(|f| f.get(index).cloned())?;
        Some(objects.list.with(|l| chart::series(&field, l.items())))
    };

    let plot = move || {
        let Some(series) = series() else {
            return view! { <p class="text-muted">"Add fields to see a chart."</p> }.into_any();
        };
        let bars = layout.bars(&series);
        let ticks = layout.ticks(&series, TICKS);
        let body = match kind.get() {
            ChartKind::Bar => bars
                .iter()
                .map(|b| view! {
                    <rect
                        class="chart-bar"
                        x=px(b.x)
                        y=px(b.y)
                        width=px(b.width)
                        height=px(b.height)
                        data-value=b.value.to_string()
                    />
                })
                .collect_view()
                .into_any(),
            ChartKind::Line => {
                let points = layout.polyline(&series);
                view! { <polyline class="chart-line" fill="none" points=points /> }.into_any()
            }
        };
        view! {
            <svg
                class="comparison-chart"
                viewBox=format!("0 0 {} {}", layout.width, layout.height)
                role="img"
                aria-label=series.label.clone()
            >
                {ticks
                    .into_iter()
                    .map(|(value, y)| view! {
                        <line class="chart-grid" x1=px(layout.padding) x2=px(layout.width - layout.padding) y1=px(y) y2=px(y) />
                        <text class="chart-tick" x=px(layout.padding - 6.0) y=px(y) text-anchor="end">{value.to_string()}</text>
                    })
                    .collect_view()}
                {body}
                {bars
                    .iter()
                    .map(|b| view! {
                        <text class="chart-label" x=px(b.x + b.width / 2.0) y=px(layout.baseline() + 16.0) text-anchor="middle">
                            {b.label.clone()}
                        </text>
                    })
                    .collect_view()}
            </svg>
        }
        .into_any()
    };

    view! {
        <div class="chart-controls d-flex gap-2 mb-3">
            <select
                id="chartFieldSelect"
                class="form-select"
                on:change=move |ev| set_selected.set(event_target_value(&ev).parse().unwrap_or(0))
            >
                {fields.with_value(|f| f.iter().enumerate().map(|(i, field)| view! {
                    <option value=i.to_string() selected={i == initial}>{field.field_name.clone()}</option>
                }).collect_view())}
            </select>
            <select
                id="chartTypeSelect"
                class="form-select"
                on:change=move |ev| set_kind.set(ChartKind::parse(&event_target_value(&ev)))
            >
                <option value=ChartKind::Bar.as_str()>"Bar"</option>
                <option value=ChartKind::Line.as_str()>"Line"</option>
            </select>
        </div>
        <div class="chart-container">{plot}</div>
    }
}
