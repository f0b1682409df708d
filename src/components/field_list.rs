//! Field List Component
//!
//! The setup page's sortable list of fields. Rows are dragged with the
//! mouse; the hovered row's midpoint decides before/after, and the new
//! order is saved in the background.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{AnimatedList, FieldActions};
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Field;
use crate::notify::{Notifier, Severity};

use leptos_dragdrop::*;

#[component]
pub fn FieldList(analysis_id: u32, fields: AnimatedList<Field>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |dragged, target, position| {
        spawn_local(async move {
            let api = ctx.api();
            let actions = FieldActions::new(analysis_id, &api, &ctx.notifier, &fields);
            actions.reorder(dragged, target, position).await;
        });
    });

    let rows = move || fields.list.with(|l| l.items().to_vec());

    view! {
        <Show
            when=move || !fields.list.with(|l| l.is_empty())
            fallback=|| view! {
                <div class="empty-state text-center text-muted py-4">
                    <i class="bi bi-list-check display-6"></i>
                    <p class="mt-2">"No fields yet. Add one or pick a suggestion."</p>
                </div>
            }
        >
            <div id="fieldsList" class="fields-list">
                <For
                    each=rows
                    key=|field: &Field| (field.id, field.field_name.clone(), field.is_required, field.field_unit.clone())
                    children=move |field: Field| {
                        let id = field.id;

                        let on_mousedown = make_on_mousedown(dnd, id);
                        let on_mousemove = make_on_item_mousemove(dnd, id);
                        let on_mouseleave = make_on_mouseleave(dnd);

                        let row_class = move || {
                            let mut c = String::from("field-item glass-card p-3 mb-3");
                            if dnd.dragging() == Some(id) { c.push_str(" dragging"); }
                            if let Some(hint) = dnd.drop_hint_read.get() {
                                if hint.target == id {
                                    c.push(' ');
                                    c.push_str(hint.position.class());
                                }
                            }
                            if fields.is_exiting(id) { c.push_str(" removing"); }
                            c
                        };

                        let on_delete = Callback::new(move |_: ()| {
                            spawn_local(async move {
                                let api = ctx.api();
                                FieldActions::new(analysis_id, &api, &ctx.notifier, &fields).delete(id).await;
                            });
                        });

                        view! {
                            <div
                                class=row_class
                                data-field-id=id.to_string()
                                on:mousedown=on_mousedown
                                on:mousemove=on_mousemove
                                on:mouseleave=on_mouseleave
                            >
                                <div class="d-flex align-items-center">
                                    <div class="drag-handle me-3">
                                        <i class="bi bi-grip-vertical text-muted"></i>
                                    </div>
                                    <div class="field-info flex-grow-1">
                                        <div class="d-flex align-items-center mb-1">
                                            <h5 class="mb-0 me-2">{field.field_name.clone()}</h5>
                                            {field.is_required.then(|| view! {
                                                <span class="badge bg-danger">"Required"</span>
                                            })}
                                            {field.unit().map(|unit| view! {
                                                <span class="badge bg-info ms-1">{unit.to_string()}</span>
                                            })}
                                        </div>
                                        <small class="text-muted">
                                            <i class="bi bi-gear me-1"></i>
                                            {field.field_type.label()}
                                        </small>
                                    </div>
                                    <div class="field-actions">
                                        <button
                                            type="button"
                                            class="btn btn-outline-primary btn-sm me-1"
                                            title="Edit"
                                            on:click=move |_| {
                                                ctx.notifier.notify("Field editing coming soon!", Severity::Info, None);
                                            }
                                        >
                                            <i class="bi bi-pencil"></i>
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="btn btn-outline-danger btn-sm"
                                            prompt="Delete field and its data?"
                                            on_confirm=on_delete
                                        />
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
