use leptos::prelude::*;

use crate::actions::AnimatedList;
use crate::components::CellView;
use crate::models::{ComparedObject, Field};
use crate::table_sort::Cell;

/// Card view of the compared objects
#[component]
pub fn ObjectCards(fields: StoredValue<Vec<Field>>, objects: AnimatedList<ComparedObject>) -> impl IntoView {
    view! {
        <div class="row g-3">
            <For
                each=move || objects.list.with(|l| l.items().to_vec())
                key=|obj: &ComparedObject| obj.id
                children=move |obj: ComparedObject| {
                    let id = obj.id;
                    let details = fields.with_value(|f| {
                        f.iter()
                            .map(|field| {
                                let cell = Cell::render(field.field_type, obj.value(field.id));
                                view! {
                                    <li class="d-flex justify-content-between">
                                        <span class="text-muted">{field.field_name.clone()}</span>
                                        <CellView cell=cell field_type=field.field_type />
                                    </li>
                                }
                            })
                            .collect_view()
                    });
                    view! {
                        <div
                            class=move || if objects.is_exiting(id) { "col-md-4 object-card removing" } else { "col-md-4 object-card" }
                            data-object-id=id.to_string()
                        >
                            <div class="glass-card p-3 h-100">
                                {obj.image_url.clone().map(|url| view! {
                                    <img src=url alt=obj.object_name.clone() class="card-img-top mb-2 object-image" />
                                })}
                                <h5 class="fw-bold mb-0">{obj.object_name.clone()}</h5>
                                {obj.brand.clone().map(|b| view! { <small class="text-muted">{b}</small> })}
                                <ul class="list-unstyled mt-3 mb-0">{details}</ul>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
