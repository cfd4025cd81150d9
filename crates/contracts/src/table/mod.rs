//! Tabular view engine: typed cell values, column schema and the pure
//! filter / sort / paginate pipeline behind the data-table widget.
//!
//! Everything here is UI-free and synchronous. The frontend owns a
//! [`TableViewState`] snapshot and recomputes the visible page from the
//! full row collection on every interaction.

mod column;
mod filter;
mod paginate;
mod row;
mod sort;
mod value;
mod view_state;

pub use column::{Column, ColumnType, Columns};
pub use filter::{apply_filters, FilterOperator, FilterPredicate, FilterValue};
pub use paginate::{paginate, sanitize_page_size_options, total_pages, PageState, MAX_PAGE_SIZE};
pub use row::Row;
pub use sort::{sort_rows, toggle_sort, SortDirection, SortEntry};
pub use value::{parse_datetime, CellValue};
pub use view_state::{TableView, TableViewState};
