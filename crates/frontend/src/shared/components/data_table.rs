use std::collections::HashSet;

use contracts::forms::{FieldSchema, FieldType, FormValues, SelectOption};
use contracts::table::{
    sanitize_page_size_options, CellValue, ColumnType, Columns, FilterOperator, FilterPredicate,
    FilterValue, Row, TableViewState,
};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::form_field::FormField;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;

/// Generic data-table widget: global search, a schema-driven column filter
/// row, multi-key sortable headers, checkbox selection and pagination —
/// all over a row collection owned by the caller.
///
/// The widget performs no I/O and never mutates rows; every user intent
/// (add, edit, delete, bulk delete, search applied) surfaces through a
/// callback. Selection lives in a caller-owned signal so the caller can
/// clear it once a bulk delete actually happened.
#[component]
pub fn DataTable(
    #[prop(into)] title: String,

    /// Full row collection; the widget derives the visible page from it.
    #[prop(into)]
    rows: Signal<Vec<Row>>,

    columns: Columns,

    /// Fields rendered in the collapsible filter row.
    #[prop(optional)]
    search_schema: Vec<FieldSchema>,

    /// Selected row ids, owned by the caller.
    selected: RwSignal<HashSet<String>>,

    #[prop(optional)] page_size_options: Option<Vec<usize>>,

    /// Starting page size; defaults to the smallest offered option.
    #[prop(optional)]
    initial_page_size: Option<usize>,

    on_add: Callback<()>,
    on_edit: Callback<Row>,
    on_delete: Callback<Row>,
    on_bulk_delete: Callback<Vec<String>>,

    /// Fired whenever search text or the predicate list is applied.
    #[prop(optional)]
    on_search: Option<Callback<(String, Vec<FilterPredicate>)>>,

    #[prop(optional, into)] search_placeholder: String,
) -> impl IntoView {
    let page_size_opts =
        sanitize_page_size_options(&page_size_options.unwrap_or_else(|| vec![10, 30, 50, 100]));
    let initial_page_size =
        initial_page_size.unwrap_or_else(|| page_size_opts.first().copied().unwrap_or(10));

    let columns = StoredValue::new(columns);
    let search_fields = StoredValue::new(prepare_search_fields(search_schema));

    let view_state = RwSignal::new({
        let mut state = TableViewState::new();
        state.set_page_size(initial_page_size);
        state
    });
    let filters_expanded = RwSignal::new(true);
    let filter_inputs = RwSignal::new(FormValues::new());

    // The whole pipeline re-runs on any state change; rows are in memory
    // and the stages are pure, so this stays within a render frame.
    let table_view = Memo::new(move |_| {
        let state = view_state.get();
        let rows = rows.get();
        columns.with_value(|c| state.apply(&rows, c))
    });

    let page_rows = Signal::derive(move || table_view.get().page_rows);
    let selected_signal = Signal::derive(move || selected.get());

    let emit_search = move || {
        if let Some(callback) = on_search {
            let (search, predicates) =
                view_state.with_untracked(|s| (s.search.clone(), s.predicates.clone()));
            callback.run((search, predicates));
        }
    };

    let apply_search_text = Callback::new(move |text: String| {
        view_state.update(|s| s.set_search(text));
        emit_search();
    });

    let apply_column_filters = move |_| {
        let predicates =
            search_fields.with_value(|f| build_predicates(f, &filter_inputs.get_untracked()));
        view_state.update(|s| columns.with_value(|c| s.set_predicates(predicates, c)));
        emit_search();
    };

    let clear_column_filters = move |_| {
        filter_inputs.set(FormValues::new());
        view_state.update(|s| columns.with_value(|c| s.set_predicates(Vec::new(), c)));
        emit_search();
    };

    let handle_filter_input = Callback::new(move |(name, value): (String, String)| {
        filter_inputs.update(|inputs| {
            inputs.insert(name, value);
        });
    });

    let handle_sort = Callback::new(move |(key, additive): (String, bool)| {
        view_state.update(|s| columns.with_value(|c| s.toggle_sort(c, &key, additive)));
    });

    let go_to_page = move |page: usize| {
        view_state.update(|s| s.set_page_index(page));
    };

    let change_page_size = move |size: usize| {
        view_state.update(|s| s.set_page_size(size));
    };

    let toggle_selection = move |id: String, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    // "Select all" touches only the rows visible on the current page.
    let toggle_all = move |check_all: bool| {
        let page_ids: Vec<String> = page_rows.get_untracked().iter().map(|r| r.id.clone()).collect();
        selected.update(|s| {
            if check_all {
                s.extend(page_ids);
            } else {
                for id in page_ids {
                    s.remove(&id);
                }
            }
        });
    };

    let bulk_delete = move |_| {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if !ids.is_empty() {
            on_bulk_delete.run(ids);
        }
    };

    let sort_entries = Signal::derive(move || view_state.get().sort.clone());
    let active_filters = Signal::derive(move || view_state.get().active_filter_count());

    let search_placeholder = if search_placeholder.is_empty() {
        "Search...".to_string()
    } else {
        search_placeholder
    };

    view! {
        <div class="data-table">
            <div class="data-table__header">
                <div class="data-table__header-left">
                    <span class="data-table__title">{title}</span>
                    <Badge>{move || table_view.get().filtered_count.to_string()}</Badge>
                    {move || {
                        let count = selected.get().len();
                        if count > 0 {
                            view! {
                                <span class="data-table__selected-count">
                                    {format!("{} selected", count)}
                                </span>
                            }
                                .into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="data-table__header-right">
                    <SearchInput
                        value=Signal::derive(move || view_state.get().search.clone())
                        on_change=apply_search_text
                        placeholder=search_placeholder
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_add.run(())>
                        {icon("plus")}
                        " Add"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=bulk_delete
                        disabled=Signal::derive(move || selected.get().is_empty())
                    >
                        {icon("trash")}
                        " Delete selected"
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div
                        class="filter-panel-header__left"
                        on:click=move |_| filters_expanded.update(|e| *e = !*e)
                    >
                        <svg
                            width="16"
                            height="16"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class=move || {
                                if filters_expanded.get() {
                                    "filter-panel__chevron filter-panel__chevron--expanded"
                                } else {
                                    "filter-panel__chevron"
                                }
                            }
                        >
                            <polyline points="6 9 12 15 18 9"></polyline>
                        </svg>
                        {icon("filter")}
                        <span class="filter-panel__title">"Filters"</span>
                        {move || {
                            let count = active_filters.get();
                            if count > 0 {
                                view! { <span class="badge badge--primary">{count}</span> }
                                    .into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>
                    <div class="filter-panel-header__center">
                        <PaginationControls
                            current_page=Signal::derive(move || view_state.get().page.page_index)
                            total_pages=Signal::derive(move || table_view.get().total_pages)
                            total_count=Signal::derive(move || table_view.get().filtered_count)
                            page_size=Signal::derive(move || view_state.get().page.page_size)
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                            page_size_options=page_size_opts.clone()
                        />
                    </div>
                    <div class="filter-panel-header__right"></div>
                </div>

                <div class=move || {
                    if filters_expanded.get() {
                        "filter-panel__collapsible filter-panel__collapsible--expanded"
                    } else {
                        "filter-panel__collapsible filter-panel__collapsible--collapsed"
                    }
                }>
                    <div class="filter-panel-content">
                        <div class="data-table__filters">
                            {search_fields
                                .get_value()
                                .into_iter()
                                .map(|field| {
                                    let name = field.name.clone();
                                    let value = Signal::derive(move || {
                                        filter_inputs.get().get(&name).cloned().unwrap_or_default()
                                    });
                                    view! {
                                        <FormField
                                            field=field
                                            value=value
                                            on_change=handle_filter_input
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="data-table__filter-actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=clear_column_filters
                            >
                                "Clear"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=apply_column_filters
                            >
                                "Apply"
                            </Button>
                        </div>
                    </div>
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:class="data-table__table">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                items=page_rows
                                selected=selected_signal
                                get_id=Callback::new(|row: Row| row.id.clone())
                                on_change=Callback::new(toggle_all)
                            />
                            {columns
                                .get_value()
                                .iter()
                                .cloned()
                                .collect::<Vec<_>>()
                                .into_iter()
                                .map(|col| {
                                    let min_width = col.width.map(f64::from).unwrap_or(100.0);
                                    if col.sortable {
                                        view! {
                                            <SortableHeaderCell
                                                label=col.label.clone()
                                                sort_key=col.key.clone()
                                                entries=sort_entries
                                                on_sort=handle_sort
                                                min_width=min_width
                                            />
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <TableHeaderCell min_width=min_width>
                                                {col.label.clone()}
                                            </TableHeaderCell>
                                        }
                                            .into_any()
                                    }
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || page_rows.get()
                            key=|row| row.id.clone()
                            children=move |row| {
                                let row_id = row.id.clone();
                                view! {
                                    <TableRow>
                                        <TableCellCheckbox
                                            item_id=row_id
                                            selected=selected_signal
                                            on_change=Callback::new(move |(id, checked)| {
                                                toggle_selection(id, checked)
                                            })
                                        />
                                        {columns
                                            .get_value()
                                            .iter()
                                            .map(|col| {
                                                if col.column_type == ColumnType::Actions {
                                                    let row_for_edit = row.clone();
                                                    let row_for_delete = row.clone();
                                                    view! {
                                                        <TableCell>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| on_edit.run(row_for_edit.clone())
                                                                attr:title="Edit"
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| on_delete.run(row_for_delete.clone())
                                                                attr:title="Delete"
                                                            >
                                                                {icon("trash")}
                                                            </Button>
                                                        </TableCell>
                                                    }
                                                        .into_any()
                                                } else {
                                                    let text = format_cell(row.get(&col.key), col.column_type);
                                                    view! {
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                        </TableCell>
                                                    }
                                                        .into_any()
                                                }
                                            })
                                            .collect_view()}
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

/// Filter-row selects get a leading "All" option so an untouched select
/// stays inert.
fn prepare_search_fields(fields: Vec<FieldSchema>) -> Vec<FieldSchema> {
    fields
        .into_iter()
        .map(|mut field| {
            if field.field_type == FieldType::Select
                && field.options.first().map(|o| !o.value.is_empty()).unwrap_or(false)
            {
                field.options.insert(0, SelectOption::new("", "All"));
            }
            field.default_value = None;
            field
        })
        .collect()
}

/// Maps filter-row inputs to engine predicates. Text-like fields search by
/// substring, selects and numbers match exactly, date fields filter by an
/// inclusive range.
fn build_predicates(fields: &[FieldSchema], inputs: &FormValues) -> Vec<FilterPredicate> {
    fields
        .iter()
        .filter_map(|field| {
            let raw = inputs.get(&field.name)?.trim().to_string();
            if raw.is_empty() || raw == "," {
                return None;
            }
            let predicate = match field.field_type {
                FieldType::Select | FieldType::Number => {
                    FilterPredicate::scalar(&field.name, FilterOperator::Equals, raw)
                }
                FieldType::DateRange | FieldType::DateTimeRange => {
                    let (from, to) = raw
                        .split_once(',')
                        .map(|(a, b)| (a.trim().to_string(), b.trim().to_string()))
                        .unwrap_or((raw.clone(), String::new()));
                    FilterPredicate::new(
                        &field.name,
                        FilterOperator::Between,
                        FilterValue::Range { from, to },
                    )
                }
                FieldType::Date | FieldType::DateTime => {
                    FilterPredicate::scalar(&field.name, FilterOperator::Equals, raw)
                }
                _ => FilterPredicate::scalar(&field.name, FilterOperator::Contains, raw),
            };
            Some(predicate)
        })
        .collect()
}

/// Cell text for the current column type. Missing values render as "-".
fn format_cell(value: Option<&CellValue>, column_type: ColumnType) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    if value.is_null() {
        return "-".to_string();
    }
    match (column_type, value) {
        (ColumnType::Date, CellValue::Date(d)) => format_date(d),
        (ColumnType::Date, _) => value
            .as_datetime()
            .map(|dt| format_date(&dt.date()))
            .unwrap_or_else(|| value.to_search_string()),
        (ColumnType::DateTime, CellValue::DateTime(dt)) => format_datetime(dt),
        (ColumnType::DateTime, _) => value
            .as_datetime()
            .map(|dt| format_datetime(&dt))
            .unwrap_or_else(|| value.to_search_string()),
        _ => value.to_search_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Vec<FieldSchema> {
        vec![
            FieldSchema::new("firstname", "First Name", FieldType::Text),
            FieldSchema::new("status", "Status", FieldType::Select).options(vec![
                SelectOption::plain("Active"),
                SelectOption::plain("Inactive"),
            ]),
            FieldSchema::new("dob", "Date of Birth", FieldType::DateRange),
        ]
    }

    #[test]
    fn test_empty_inputs_build_no_predicates() {
        let predicates = build_predicates(&schema(), &FormValues::new());
        assert!(predicates.is_empty());

        let mut inputs = FormValues::new();
        inputs.insert("firstname".into(), "   ".into());
        inputs.insert("dob".into(), ",".into());
        assert!(build_predicates(&schema(), &inputs).is_empty());
    }

    #[test]
    fn test_operator_mapping() {
        let mut inputs = FormValues::new();
        inputs.insert("firstname".into(), "ann".into());
        inputs.insert("status".into(), "Active".into());
        inputs.insert("dob".into(), "2025-01-01,2025-12-31".into());

        let predicates = build_predicates(&schema(), &inputs);
        assert_eq!(predicates.len(), 3);

        let by_key = |key: &str| predicates.iter().find(|p| p.column_key == key).unwrap();
        assert_eq!(by_key("firstname").operator, FilterOperator::Contains);
        assert_eq!(by_key("status").operator, FilterOperator::Equals);
        assert_eq!(by_key("dob").operator, FilterOperator::Between);
        assert_eq!(
            by_key("dob").value,
            FilterValue::Range {
                from: "2025-01-01".into(),
                to: "2025-12-31".into()
            }
        );
    }

    #[test]
    fn test_select_gets_all_option() {
        let prepared = prepare_search_fields(schema());
        let status = prepared.iter().find(|f| f.name == "status").unwrap();
        assert_eq!(status.options[0].value, "");
        // idempotent-looking double call must not stack "All" options
        let again = prepare_search_fields(prepared);
        let status = again.iter().find(|f| f.name == "status").unwrap();
        assert_eq!(status.options.iter().filter(|o| o.value.is_empty()).count(), 1);
    }

    #[test]
    fn test_format_cell_dates() {
        let date = CellValue::Date(chrono::NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(format_cell(Some(&date), ColumnType::Date), "01.12.2025");

        // ISO text in a date column still renders as a date
        let text = CellValue::Text("2025-12-01".into());
        assert_eq!(format_cell(Some(&text), ColumnType::Date), "01.12.2025");

        assert_eq!(format_cell(None, ColumnType::Text), "-");
        assert_eq!(format_cell(Some(&CellValue::Null), ColumnType::Text), "-");
    }
}
