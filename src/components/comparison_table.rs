//! Comparison Table Component
//!
//! Objects as rows, fields as columns. Header clicks sort through
//! `TableSorter`; rows replay a staggered slide-in after every sort.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{navigate, AnimatedList, ObjectActions};
use crate::animation::row_slide_in;
use crate::api::routes;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{ComparedObject, Field, FieldType};
use crate::table_sort::{Cell, TableSorter, MAX_STARS};

/// Column 0 is the object name; field columns follow in display order
fn cell_for(fields: &[Field], column: usize, obj: &ComparedObject) -> Cell {
    match column.checked_sub(1).and_then(|i| fields.get(i)) {
        Some(field) => Cell::render(field.field_type, obj.value(field.id)),
        None => Cell::text(obj.object_name.clone()),
    }
}

/// Rendered value: stars, a yes/no badge, or plain text
#[component]
pub fn CellView(cell: Cell, field_type: FieldType) -> impl IntoView {
    match field_type {
        FieldType::Rating => {
            let filled = cell.filled_stars;
            view! {
                <span class="rating-display">
                    {(0..MAX_STARS)
                        .map(|i| {
                            let class = if i < filled { "bi bi-star-fill text-warning" } else { "bi bi-star text-muted" };
                            view! { <i class=class></i> }
                        })
                        .collect_view()}
                </span>
            }
            .into_any()
        }
        FieldType::Boolean if cell.badge.is_some() => {
            let badge = cell.badge.unwrap_or_default();
            let class = if badge == "Yes" { "badge bg-success" } else { "badge bg-secondary" };
            view! { <span class=class>{badge}</span> }.into_any()
        }
        _ => view! { <span>{cell.text}</span> }.into_any(),
    }
}

#[component]
pub fn ComparisonTable(
    analysis_id: u32,
    fields: StoredValue<Vec<Field>>,
    objects: AnimatedList<ComparedObject>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let sorter = RwSignal::new(TableSorter::default());
    // Bumped per sort so rows are rebuilt and their slide-in replays
    let (sort_epoch, set_sort_epoch) = signal(0u32);

    let sort_column = move |column: usize, field_type: FieldType| {
        objects.list.update(|rows| {
            sorter.update(|s| {
                fields.with_value(|f| {
                    s.sort(rows, column, field_type, |obj| cell_for(f, column, obj));
                });
            });
        });
        set_sort_epoch.update(|e| *e += 1);
    };

    let header_class = move |column: usize| {
        let mut c = String::from("sortable");
        if let Some(indicator) = sorter.with(|s| s.state().indicator(column)) {
            c.push(' ');
            c.push_str(indicator);
        }
        c
    };

    let rows = move || {
        let epoch = sort_epoch.get();
        objects
            .list
            .with(|l| l.iter().cloned().enumerate().map(|(i, obj)| (i, epoch, obj)).collect::<Vec<_>>())
    };

    view! {
        <div class="table-responsive">
            <table class="table table-hover comparison-table">
                <thead>
                    <tr>
                        <th
                            class=move || header_class(0)
                            data-type="text"
                            on:click=move |_| sort_column(0, FieldType::Text)
                        >
                            "Object"
                        </th>
                        {fields.with_value(|f| f.iter().enumerate().map(|(i, field)| {
                            let column = i + 1;
                            let field_type = field.field_type;
                            let title = match field.unit() {
                                Some(unit) => format!("{} ({})", field.field_name, unit),
                                None => field.field_name.clone(),
                            };
                            view! {
                                <th
                                    class=move || header_class(column)
                                    data-type=field_type.as_str()
                                    on:click=move |_| sort_column(column, field_type)
                                >
                                    {title}
                                </th>
                            }
                        }).collect_view())}
                        <th class="text-end">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|(_, epoch, obj): &(usize, u32, ComparedObject)| (obj.id, *epoch)
                        children=move |(index, epoch, obj): (usize, u32, ComparedObject)| {
                            let id = obj.id;
                            let style = if epoch > 0 { row_slide_in(index) } else { String::new() };
                            let row_class = move || {
                                if objects.is_exiting(id) { "object-row removing" } else { "object-row" }
                            };
                            let on_delete = Callback::new(move |_: ()| {
                                spawn_local(async move {
                                    let api = ctx.api();
                                    ObjectActions::new(analysis_id, &api, &ctx.notifier, &objects).delete(id).await;
                                });
                            });
                            let cells = fields.with_value(|f| {
                                f.iter()
                                    .enumerate()
                                    .map(|(i, field)| {
                                        let cell = cell_for(f, i + 1, &obj);
                                        let field_type = field.field_type;
                                        view! {
                                            <td class="field-value" data-field-type=field_type.as_str()>
                                                <CellView cell=cell field_type=field_type />
                                            </td>
                                        }
                                    })
                                    .collect_view()
                            });
                            view! {
                                <tr class=row_class style=style data-object-id=id.to_string()>
                                    <td>
                                        <div class="fw-bold">{obj.object_name.clone()}</div>
                                        {obj.brand.clone().map(|b| view! { <small class="text-muted">{b}</small> })}
                                    </td>
                                    {cells}
                                    <td class="text-end text-nowrap">
                                        <button
                                            type="button"
                                            class="btn btn-outline-primary btn-sm me-1"
                                            title="Edit"
                                            on:click=move |_| navigate(&routes::edit_object(analysis_id, id))
                                        >
                                            <i class="bi bi-pencil"></i>
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="btn btn-outline-danger btn-sm"
                                            on_confirm=on_delete
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
