use std::collections::HashSet;

use leptos::prelude::*;
use thaw::*;

/// Row-selection checkbox cell. Stops click propagation so selecting a row
/// does not also trigger row-level click handlers.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)] item_id: String,

    #[prop(into)] selected: Signal<HashSet<String>>,

    /// Callback with (item_id, checked).
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();
    let item_id_for_change = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.get().contains(&item_id_for_checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id_for_change.clone(), checked));
                }
            />
        </TableCell>
    }
}
