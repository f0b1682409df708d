//! Object Form Page
//!
//! Native form posted to the server to add or edit one compared object.
//! Required inputs are checked on blur and again before submitting.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::api::routes;
use crate::components::StarRating;
use crate::context::AppContext;
use crate::forms::{image_preview, input_name, missing_required, FieldCheck, REQUIRED_WARNING};
use crate::models::{Field, FieldType};
use crate::notify::{Notifier, Severity};
use crate::page::ObjectFormData;

const OBJECT_NAME: &str = "object_name";

/// Blur state of one input, `None` until it was first left
fn check_class(checks: RwSignal<HashMap<String, FieldCheck>>, name: &str, base: &str) -> String {
    match checks.with(|c| c.get(name).copied()) {
        Some(check) => format!("{} {}", base, check.class()),
        None => base.to_string(),
    }
}

#[component]
fn FieldInput(
    field: Field,
    initial: String,
    values: RwSignal<HashMap<String, String>>,
    checks: RwSignal<HashMap<String, FieldCheck>>,
) -> impl IntoView {
    let name = input_name(field.id);
    let required = field.is_required;

    let record = {
        let name = name.clone();
        move |value: String| {
            values.update(|v| {
                v.insert(name.clone(), value);
            })
        }
    };
    let on_blur = {
        let name = name.clone();
        move |ev: web_sys::FocusEvent| {
            if required {
                let check = FieldCheck::of(&event_target_value(&ev));
                checks.update(|c| {
                    c.insert(name.clone(), check);
                });
            }
        }
    };
    let class = {
        let name = name.clone();
        move |base: &'static str| {
            let name = name.clone();
            move || check_class(checks, &name, base)
        }
    };

    match field.field_type {
        FieldType::Rating => {
            let name_for_cb = name.clone();
            let on_change = Callback::new(move |value: String| {
                checks.update(|c| {
                    c.insert(name_for_cb.clone(), FieldCheck::of(&value));
                });
                values.update(|v| {
                    v.insert(name_for_cb.clone(), value);
                });
            });
            view! { <StarRating name=name initial=initial required=required on_change=on_change /> }.into_any()
        }
        FieldType::Boolean => {
            let selected = initial.clone();
            view! {
                <select
                    class=class("form-select")
                    name=name.clone()
                    id=name
                    required=required
                    on:change=move |ev| record(event_target_value(&ev))
                    on:blur=on_blur
                >
                    <option value="">"Select..."</option>
                    <option value="Yes" selected={selected == "Yes"}>"Yes"</option>
                    <option value="No" selected={selected == "No"}>"No"</option>
                </select>
            }.into_any()
        }
        other => {
            let (input_type, step) = match other {
                FieldType::Number => ("number", Some("1")),
                FieldType::Decimal => ("number", Some("any")),
                FieldType::Date => ("date", None),
                _ => ("text", None),
            };
            let placeholder = match field.unit() {
                Some(unit) => format!("Enter {} ({})", field.field_name.to_lowercase(), unit),
                None => format!("Enter {}", field.field_name.to_lowercase()),
            };
            view! {
                <input
                    type=input_type
                    step=step
                    class=class("form-control")
                    name=name.clone()
                    id=name
                    value=initial
                    placeholder=placeholder
                    required=required
                    on:input=move |ev| record(event_target_value(&ev))
                    on:blur=on_blur
                />
            }.into_any()
        }
    }
}

#[component]
pub fn ObjectForm(data: ObjectFormData) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let analysis = data.analysis;
    let analysis_id = analysis.id;
    let editing = data.object.is_some();

    let action = match &data.object {
        Some(obj) => routes::edit_object(analysis_id, obj.id),
        None => routes::create_object(analysis_id),
    };
    let object_name = data.object.as_ref().map(|o| o.object_name.clone()).unwrap_or_default();
    let brand = data.object.as_ref().and_then(|o| o.brand.clone()).unwrap_or_default();
    let image_url = data.object.as_ref().and_then(|o| o.image_url.clone()).unwrap_or_default();

    // Current value of every input, keyed by its posted name
    let mut initial_values = HashMap::new();
    initial_values.insert(OBJECT_NAME.to_string(), object_name.clone());
    for field in &data.fields {
        let value = data
            .object
            .as_ref()
            .and_then(|o| o.value(field.id))
            .unwrap_or_default()
            .to_string();
        initial_values.insert(input_name(field.id), value);
    }
    let values = RwSignal::new(initial_values);
    let checks = RwSignal::new(HashMap::<String, FieldCheck>::new());

    let required: Vec<String> = std::iter::once(OBJECT_NAME.to_string())
        .chain(data.fields.iter().filter(|f| f.is_required).map(|f| input_name(f.id)))
        .collect();
    let required = StoredValue::new(required);

    let (preview, set_preview) = signal(image_preview(&image_url));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        let missing: Vec<String> = required.with_value(|r| {
            values.with_untracked(|v| missing_required(r, v).into_iter().map(String::from).collect())
        });
        if missing.is_empty() {
            return;
        }
        ev.prevent_default();
        log::debug!("[FORM] Missing required inputs: {:?}", missing);
        checks.update(|c| {
            for name in missing {
                c.insert(name, FieldCheck::Invalid);
            }
        });
        ctx.notifier.notify(REQUIRED_WARNING, Severity::Warning, None);
    };

    let fields = data.fields;

    view! {
        <div class="container py-4 object-form">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="gradient-text mb-0">
                    {if editing { "Edit Object" } else { "Add Object" }}
                </h1>
                <a class="btn btn-outline-secondary" href=routes::view(analysis_id)>
                    <i class="bi bi-arrow-left me-1"></i>{format!("Back to {}", analysis.name)}
                </a>
            </div>

            <form method="post" action=action class="glass-card p-4" novalidate on:submit=on_submit>
                <div class="row mb-3">
                    <div class="col-md-6">
                        <label class="form-label" for="object_name">"Object Name *"</label>
                        <input
                            type="text"
                            id="object_name"
                            name=OBJECT_NAME
                            class=move || check_class(checks, OBJECT_NAME, "form-control")
                            value=object_name
                            placeholder="Enter object name"
                            required
                            on:input=move |ev| values.update(|v| {
                                v.insert(OBJECT_NAME.to_string(), event_target_value(&ev));
                            })
                            on:blur=move |ev| {
                                let check = FieldCheck::of(&event_target_value(&ev));
                                checks.update(|c| {
                                    c.insert(OBJECT_NAME.to_string(), check);
                                });
                            }
                        />
                    </div>
                    <div class="col-md-6">
                        <label class="form-label" for="brand">"Brand"</label>
                        <input type="text" id="brand" name="brand" class="form-control" value=brand placeholder="Enter brand" />
                    </div>
                </div>

                <div class="mb-3">
                    <label class="form-label" for="image_url">"Image URL"</label>
                    <input
                        type="url"
                        id="image_url"
                        name="image_url"
                        class="form-control"
                        value=image_url
                        placeholder="https://"
                        on:blur=move |ev| set_preview.set(image_preview(&event_target_value(&ev)))
                    />
                    {move || preview.get().map(|src| view! {
                        <div class="mt-2" id="imagePreview">
                            <img src=src alt="Preview" class="img-thumbnail" style="max-height: 160px" />
                        </div>
                    })}
                </div>

                {fields.into_iter().map(|field| {
                    let name = input_name(field.id);
                    let initial = values.with_untracked(|v| v.get(&name).cloned().unwrap_or_default());
                    let label = match field.unit() {
                        Some(unit) => format!("{} ({})", field.field_name, unit),
                        None => field.field_name.clone(),
                    };
                    let required = field.is_required;
                    view! {
                        <div class="mb-3">
                            <label class="form-label" for=name>
                                {label}
                                {required.then_some(" *")}
                            </label>
                            <FieldInput field=field initial=initial values=values checks=checks />
                        </div>
                    }
                }).collect_view()}

                <div class="d-flex gap-2">
                    <button type="submit" class="btn btn-primary">
                        <i class="bi bi-check-lg me-1"></i>
                        {if editing { "Save Changes" } else { "Add Object" }}
                    </button>
                    <a class="btn btn-secondary" href=routes::view(analysis_id)>"Cancel"</a>
                </div>
            </form>
        </div>
    }
}
