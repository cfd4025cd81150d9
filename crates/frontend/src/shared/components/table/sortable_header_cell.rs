use contracts::table::{SortDirection, SortEntry};
use leptos::prelude::*;
use thaw::*;

/// Sortable column header.
///
/// Shows the column's place in the active multi-key sort: an arrow for the
/// direction plus a priority number once more than one column sorts. A
/// plain click resets the sort to this column; a shift-click adds/advances
/// it inside the existing sequence.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,

    /// Column key this header sorts by.
    #[prop(into)]
    sort_key: String,

    /// Active sort sequence from the view state.
    #[prop(into)]
    entries: Signal<Vec<SortEntry>>,

    /// Callback with (column_key, additive) where additive carries the
    /// shift-key state.
    on_sort: Callback<(String, bool)>,

    #[prop(optional, default = 100.0)] min_width: f64,
) -> impl IntoView {
    let key_for_click = sort_key.clone();
    let key_for_indicator = sort_key.clone();

    let handle_click = move |ev: leptos::ev::MouseEvent| {
        on_sort.run((key_for_click.clone(), ev.shift_key()));
    };

    let indicator = move || {
        let entries = entries.get();
        let position = entries
            .iter()
            .position(|e| e.column_key == key_for_indicator);
        match position {
            None => " ⇅".to_string(),
            Some(index) => {
                let arrow = match entries[index].direction {
                    SortDirection::Ascending => "▲",
                    SortDirection::Descending => "▼",
                };
                if entries.len() > 1 {
                    format!(" {}{}", arrow, index + 1)
                } else {
                    format!(" {}", arrow)
                }
            }
        }
    };

    let sort_key_for_class = sort_key.clone();
    let indicator_class = move || {
        if entries.get().iter().any(|e| e.column_key == sort_key_for_class) {
            "table__sort-indicator table__sort-indicator--active"
        } else {
            "table__sort-indicator"
        }
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=handle_click
            >
                {label}
                <span class=indicator_class>{indicator}</span>
            </div>
        </TableHeaderCell>
    }
}
