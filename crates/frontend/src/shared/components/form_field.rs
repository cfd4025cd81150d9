use contracts::forms::{FieldSchema, FieldType};
use leptos::prelude::*;

/// Renders one input from a field definition. All values travel as raw
/// strings; range fields compose theirs as "start,end".
#[component]
pub fn FormField(
    field: FieldSchema,
    #[prop(into)] value: Signal<String>,
    /// Callback with (field_name, new_value).
    on_change: Callback<(String, String)>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, default = false)] disabled: bool,
) -> impl IntoView {
    let name = field.name.clone();
    let label = field.label.clone();
    let disabled = disabled || field.disabled;

    let control = match field.field_type {
        FieldType::Select => {
            let name = name.clone();
            let options = field.options.clone();
            view! {
                <select
                    class="form-field__select"
                    disabled=disabled
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.run((name.clone(), event_target_value(&ev)))
                >
                    {options
                        .iter()
                        .map(|opt| {
                            let opt_value = opt.value.clone();
                            let selected = {
                                let opt_value = opt_value.clone();
                                move || value.get() == opt_value
                            };
                            view! {
                                <option value=opt_value selected=selected>
                                    {opt.label.clone()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        FieldType::TextArea => {
            let name = name.clone();
            view! {
                <textarea
                    class="form-field__textarea"
                    rows="3"
                    placeholder=field.placeholder.clone().unwrap_or_default()
                    maxlength=field.max_length.map(|l| l.to_string())
                    disabled=disabled
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run((name.clone(), event_target_value(&ev)))
                ></textarea>
            }
            .into_any()
        }
        FieldType::DateRange | FieldType::DateTimeRange => {
            let input_type = if field.field_type == FieldType::DateRange {
                "date"
            } else {
                "datetime-local"
            };
            let name_start = name.clone();
            let name_end = name.clone();
            let value_for_start = value;
            let value_for_end = value;
            view! {
                <div class="form-field__range">
                    <input
                        type=input_type
                        class="form-field__input"
                        disabled=disabled
                        prop:value=move || split_range(&value_for_start.get()).0
                        on:change=move |ev| {
                            let (_, end) = split_range(&value_for_start.get_untracked());
                            on_change
                                .run((name_start.clone(), join_range(&event_target_value(&ev), &end)));
                        }
                    />
                    <span class="form-field__range-sep">"–"</span>
                    <input
                        type=input_type
                        class="form-field__input"
                        disabled=disabled
                        prop:value=move || split_range(&value_for_end.get()).1
                        on:change=move |ev| {
                            let (start, _) = split_range(&value_for_end.get_untracked());
                            on_change
                                .run((name_end.clone(), join_range(&start, &event_target_value(&ev))));
                        }
                    />
                </div>
            }
            .into_any()
        }
        other => {
            let input_type = match other {
                FieldType::Email => "email",
                FieldType::Password => "password",
                FieldType::Number => "number",
                FieldType::Date => "date",
                FieldType::DateTime => "datetime-local",
                _ => "text",
            };
            let name = name.clone();
            view! {
                <input
                    type=input_type
                    class="form-field__input"
                    placeholder=field.placeholder.clone().unwrap_or_default()
                    maxlength=field.max_length.map(|l| l.to_string())
                    disabled=disabled
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run((name.clone(), event_target_value(&ev)))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            {control}
            {move || {
                error
                    .get()
                    .map(|e| view! { <span class="form-field__error">{e}</span> })
            }}
        </div>
    }
}

/// "start,end" -> (start, end); tolerant of missing halves.
fn split_range(raw: &str) -> (String, String) {
    match raw.split_once(',') {
        Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}

fn join_range(start: &str, end: &str) -> String {
    format!("{},{}", start, end)
}
