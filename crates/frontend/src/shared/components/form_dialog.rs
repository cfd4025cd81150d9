use std::collections::BTreeMap;

use contracts::forms::{initial_values, validate_required, FieldSchema, FormValues};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;

/// Modal dialog rendering a schema-driven form.
///
/// Validation is "required and empty" only; anything stricter is the
/// submit handler's business. On a valid submit the assembled values go to
/// `on_submit` and the dialog closes.
#[component]
pub fn FormDialog(
    #[prop(into)] title: String,

    fields: Vec<FieldSchema>,

    /// Pre-filled values for edit dialogs; create dialogs seed from the
    /// schema defaults.
    #[prop(optional)]
    initial: Option<FormValues>,

    #[prop(optional, into)] submit_label: String,

    on_close: Callback<()>,

    on_submit: Callback<FormValues>,
) -> impl IntoView {
    let submit_label = if submit_label.is_empty() {
        "Create".to_string()
    } else {
        submit_label
    };

    let seeded = match initial {
        Some(mut values) => {
            // Edit payloads may lack fields added to the schema later.
            for (name, default) in initial_values(&fields) {
                values.entry(name).or_insert(default);
            }
            values
        }
        None => initial_values(&fields),
    };

    let values = RwSignal::new(seeded);
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let fields = StoredValue::new(fields);

    let handle_change = Callback::new(move |(name, value): (String, String)| {
        values.update(|v| {
            v.insert(name.clone(), value);
        });
        errors.update(|e| {
            e.remove(&name);
        });
    });

    let handle_submit = move |_| {
        let current = values.get_untracked();
        let found = fields.with_value(|f| validate_required(f, &current));
        if found.is_empty() {
            on_submit.run(current);
            on_close.run(());
        } else {
            errors.set(found);
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="form__grid">
                        {fields
                            .get_value()
                            .into_iter()
                            .map(|field| {
                                let name = field.name.clone();
                                let name_for_error = field.name.clone();
                                let field_value = Signal::derive(move || {
                                    values.get().get(&name).cloned().unwrap_or_default()
                                });
                                let field_error = Signal::derive(move || {
                                    errors.get().get(&name_for_error).cloned()
                                });
                                view! {
                                    <FormField
                                        field=field
                                        value=field_value
                                        on_change=handle_change
                                        error=field_error
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=handle_submit>
                        {submit_label}
                    </Button>
                </div>
            </div>
        </div>
    }
}
