use serde::{Deserialize, Serialize};

use super::column::Columns;
use super::filter::{apply_filters, FilterPredicate};
use super::paginate::{paginate, total_pages, PageState, MAX_PAGE_SIZE};
use super::row::Row;
use super::sort::{sort_rows, toggle_sort, SortEntry};

/// Serializable snapshot of everything the table widget lets the user
/// change: search text, structured predicates, the sort sequence and the
/// pagination position. The widget replaces the snapshot wholesale on each
/// interaction and recomputes the visible page through [`TableViewState::apply`];
/// the transformation itself stays in pure functions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableViewState {
    pub search: String,
    pub predicates: Vec<FilterPredicate>,
    pub sort: Vec<SortEntry>,
    pub page: PageState,
}

/// Result of running the pipeline: the rows of the current page plus the
/// counts the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub page_rows: Vec<Row>,
    pub filtered_count: usize,
    pub total_pages: usize,
}

impl TableViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter -> sort -> paginate, in that order, over an immutable row
    /// collection.
    pub fn apply(&self, rows: &[Row], columns: &Columns) -> TableView {
        let filtered = apply_filters(rows, columns, &self.search, &self.predicates);
        let filtered_count = filtered.len();
        let sorted = sort_rows(&filtered, columns, &self.sort);
        let page_rows = paginate(&sorted, self.page).to_vec();
        TableView {
            page_rows,
            filtered_count,
            total_pages: total_pages(filtered_count, self.page.page_size),
        }
    }

    /// A new search query starts over from the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page.page_index = 0;
    }

    /// Replaces the predicate list, dropping predicates that reference
    /// unknown column keys, and resets to the first page.
    pub fn set_predicates(&mut self, predicates: Vec<FilterPredicate>, columns: &Columns) {
        self.predicates = predicates
            .into_iter()
            .filter(|p| columns.contains(&p.column_key))
            .collect();
        self.page.page_index = 0;
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.predicates.clear();
        self.page.page_index = 0;
    }

    /// Header click. `additive` carries the shift-key state.
    pub fn toggle_sort(&mut self, columns: &Columns, column_key: &str, additive: bool) {
        self.sort = toggle_sort(&self.sort, columns, column_key, additive);
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.page.page_index = page_index;
    }

    /// Changing the page size moves back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page = PageState::new(0, page_size.min(MAX_PAGE_SIZE));
    }

    pub fn active_filter_count(&self) -> usize {
        self.predicates.iter().filter(|p| !p.value.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::{Column, ColumnType};
    use crate::table::filter::{FilterOperator, FilterValue};
    use crate::table::sort::SortDirection;

    fn columns() -> Columns {
        Columns::new(vec![
            Column::new("id", "ID", ColumnType::Number).sortable(),
            Column::new("name", "Name", ColumnType::Text).sortable(),
        ])
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new("1").with("id", 1).with("name", "Bob"),
            Row::new("2").with("id", 2).with("name", "ann"),
            Row::new("3").with("id", 3).with("name", "Ann Marie"),
        ]
    }

    #[test]
    fn test_pipeline_order() {
        // search narrows, sort orders, page slices
        let mut state = TableViewState::new();
        state.set_search("an");
        state.toggle_sort(&columns(), "name", false);
        state.set_page_size(1);
        state.set_page_index(1);

        let view = state.apply(&rows(), &columns());
        assert_eq!(view.filtered_count, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page_rows.len(), 1);
        // "ann" < "Ann Marie" case-insensitively, page 1 holds the latter
        assert_eq!(view.page_rows[0].id, "3");
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = TableViewState::new();
        state.set_page_index(4);
        state.set_search("x");
        assert_eq!(state.page.page_index, 0);
    }

    #[test]
    fn test_predicates_reset_page_and_drop_unknown_keys() {
        let mut state = TableViewState::new();
        state.set_page_index(2);
        state.set_predicates(
            vec![
                FilterPredicate::scalar("name", FilterOperator::Contains, "a"),
                FilterPredicate::scalar("ghost", FilterOperator::Contains, "a"),
            ],
            &columns(),
        );
        assert_eq!(state.page.page_index, 0);
        assert_eq!(state.predicates.len(), 1);
        assert_eq!(state.predicates[0].column_key, "name");
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let mut state = TableViewState::new();
        state.set_page_index(3);
        state.set_page_size(50);
        assert_eq!(state.page.page_index, 0);
        assert_eq!(state.page.page_size, 50);

        state.set_page_size(100_000);
        assert_eq!(state.page.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_sort_toggle_respects_sortable_flag() {
        let cols = Columns::new(vec![
            Column::new("name", "Name", ColumnType::Text).sortable(),
            Column::new("note", "Note", ColumnType::Text),
        ]);
        let mut state = TableViewState::new();
        state.toggle_sort(&cols, "note", false);
        assert!(state.sort.is_empty());

        state.toggle_sort(&cols, "name", false);
        assert_eq!(state.sort[0].direction, SortDirection::Ascending);
    }

    #[test]
    fn test_active_filter_count_ignores_inert() {
        let mut state = TableViewState::new();
        state.set_predicates(
            vec![
                FilterPredicate::scalar("name", FilterOperator::Contains, "a"),
                FilterPredicate::new("id", FilterOperator::Equals, FilterValue::None),
            ],
            &columns(),
        );
        assert_eq!(state.active_filter_count(), 1);
    }

    #[test]
    fn test_view_state_round_trips_through_serde() {
        let mut state = TableViewState::new();
        state.set_search("ann");
        state.toggle_sort(&columns(), "id", false);
        let json = serde_json::to_string(&state).unwrap();
        let back: TableViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_apply_is_pure() {
        let rows = rows();
        let state = TableViewState::new();
        let a = state.apply(&rows, &columns());
        let b = state.apply(&rows, &columns());
        assert_eq!(a, b);
        assert_eq!(rows.len(), 3);
    }
}
