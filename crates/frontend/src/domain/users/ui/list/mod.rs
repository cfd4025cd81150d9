use std::collections::HashSet;

use contracts::forms::FormValues;
use contracts::table::{parse_datetime, CellValue, FilterPredicate, Row};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::users::{api, data, schema};
use crate::shared::components::data_table::DataTable;
use crate::shared::components::form_dialog::FormDialog;
use crate::shared::icons::icon;

/// Dashboard page: the users table bound to in-memory sample data.
///
/// All mutations are optimistic and produce a new row collection; there is
/// no backend to confirm them. Selection is owned here so a bulk delete
/// can clear it after the rows are actually removed.
#[component]
pub fn UsersListPage() -> impl IntoView {
    let rows: RwSignal<Vec<Row>> = RwSignal::new(data::sample_users());
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let countries: RwSignal<Vec<String>> = RwSignal::new(api::fallback_countries());
    let (show_create_form, set_show_create_form) = signal(false);
    let editing_row: RwSignal<Option<Row>> = RwSignal::new(None);

    // Country options come from a public dataset; offline the fallback
    // list stays in place.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_countries().await {
                Ok(names) if !names.is_empty() => countries.set(names),
                Ok(_) => {}
                Err(e) => log::warn!("countries fetch failed, using fallback: {}", e),
            }
        });
    });

    let handle_create = move |values: FormValues| {
        let id = data::next_user_id(&rows.get_untracked());
        let row = row_from_values(id, &values);
        rows.update(|all| all.insert(0, row));
    };

    let handle_edit_submit = move |values: FormValues| {
        let Some(original) = editing_row.get_untracked() else {
            return;
        };
        rows.update(|all| {
            if let Some(row) = all.iter_mut().find(|r| r.id == original.id) {
                let id = row
                    .get("id")
                    .and_then(|v| v.as_number())
                    .map(|n| n as i64)
                    .unwrap_or_default();
                *row = row_from_values(id, &values);
            }
        });
    };

    let handle_delete = move |row: Row| {
        if !confirm(&format!("Delete row {}?", row.id)) {
            return;
        }
        rows.update(|all| all.retain(|r| r.id != row.id));
        selected.update(|s| {
            s.remove(&row.id);
        });
    };

    let handle_bulk_delete = move |ids: Vec<String>| {
        if !confirm(&format!("Delete {} selected rows?", ids.len())) {
            return;
        }
        let ids: HashSet<String> = ids.into_iter().collect();
        rows.update(|all| all.retain(|r| !ids.contains(&r.id)));
        // The widget does not assume the delete happened; clearing the
        // selection is this page's job.
        selected.set(HashSet::new());
    };

    let handle_search = move |(search, predicates): (String, Vec<FilterPredicate>)| {
        log::debug!(
            "users search applied: text={:?}, {} predicate(s)",
            search,
            predicates.len()
        );
    };

    let reset_data = move |_| {
        rows.set(data::sample_users());
        selected.set(HashSet::new());
    };

    view! {
        <div class="page page--users">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=reset_data>
                        {icon("refresh")}
                        " Reset sample data"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <DataTable
                    title="Users"
                    rows=Signal::derive(move || rows.get())
                    columns=schema::columns()
                    search_schema=schema::search_schema(&countries.get_untracked())
                    selected=selected
                    page_size_options=vec![10, 30, 50, 100, 200, 300, 500]
                    on_add=Callback::new(move |_| set_show_create_form.set(true))
                    on_edit=Callback::new(move |row| editing_row.set(Some(row)))
                    on_delete=Callback::new(handle_delete)
                    on_bulk_delete=Callback::new(handle_bulk_delete)
                    on_search=Callback::new(handle_search)
                    search_placeholder="Search users..."
                />

                {move || {
                    if show_create_form.get() {
                        let countries = countries.get();
                        view! {
                            <FormDialog
                                title="Create user"
                                fields=schema::create_schema(&countries)
                                on_close=Callback::new(move |_| set_show_create_form.set(false))
                                on_submit=Callback::new(handle_create)
                            />
                        }
                            .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                {move || {
                    editing_row
                        .get()
                        .map(|row| {
                            let countries = countries.get();
                            view! {
                                <FormDialog
                                    title=format!("Edit user {}", row.id)
                                    fields=schema::create_schema(&countries)
                                    initial=values_from_row(&row)
                                    submit_label="Save"
                                    on_close=Callback::new(move |_| editing_row.set(None))
                                    on_submit=Callback::new(handle_edit_submit)
                                />
                            }
                        })
                }}
            </div>
        </div>
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Dialog values -> row. Unparseable dates become nulls rather than
/// garbage cells.
fn row_from_values(id: i64, values: &FormValues) -> Row {
    let text = |name: &str| values.get(name).cloned().unwrap_or_default();
    let date_cell = |name: &str| match parse_datetime(&text(name)) {
        Some(dt) => CellValue::Date(dt.date()),
        None => CellValue::Null,
    };
    let datetime_cell = |name: &str| match parse_datetime(&text(name)) {
        Some(dt) => CellValue::DateTime(dt),
        None => CellValue::Null,
    };

    Row::new(id.to_string())
        .with("id", id)
        .with("firstname", text("firstname"))
        .with("lastname", text("lastname"))
        .with("email", text("email"))
        .with("mobile", text("mobile"))
        .with("country", text("country"))
        .with("status", text("status"))
        .with("dob", date_cell("dob"))
        .with("subscriptionexpdate", datetime_cell("subscriptionexpdate"))
}

/// Row -> dialog values, in the formats the native date inputs expect.
fn values_from_row(row: &Row) -> FormValues {
    let mut values = FormValues::new();
    for key in ["firstname", "lastname", "email", "mobile", "country", "status"] {
        if let Some(value) = row.get(key) {
            values.insert(key.to_string(), value.to_search_string());
        }
    }
    if let Some(CellValue::Date(d)) = row.get("dob") {
        values.insert("dob".to_string(), d.format("%Y-%m-%d").to_string());
    }
    if let Some(CellValue::DateTime(dt)) = row.get("subscriptionexpdate") {
        values.insert(
            "subscriptionexpdate".to_string(),
            dt.format("%Y-%m-%dT%H:%M").to_string(),
        );
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_round_trips_through_form_values() {
        let rows = data::sample_users();
        let row = &rows[0];
        let values = values_from_row(row);
        assert_eq!(values["firstname"], "John");
        assert_eq!(values["dob"], "1994-03-12");
        assert_eq!(values["subscriptionexpdate"], "2025-12-01T14:30");

        let rebuilt = row_from_values(1, &values);
        assert_eq!(rebuilt.get("dob"), row.get("dob"));
        assert_eq!(
            rebuilt.get("subscriptionexpdate"),
            row.get("subscriptionexpdate")
        );
    }

    #[test]
    fn test_bad_date_input_becomes_null() {
        let mut values = FormValues::new();
        values.insert("dob".into(), "not-a-date".into());
        let row = row_from_values(99, &values);
        assert_eq!(row.get("dob"), Some(&CellValue::Null));
    }

    #[test]
    fn test_missing_fields_default_to_empty_text() {
        let row = row_from_values(5, &FormValues::new());
        assert_eq!(row.get("firstname"), Some(&CellValue::Text(String::new())));
        assert_eq!(row.id, "5");
    }
}
