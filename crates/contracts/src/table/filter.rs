use serde::{Deserialize, Serialize};

use super::column::{ColumnType, Columns};
use super::row::Row;
use super::value::{parse_datetime, CellValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    Contains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    Between,
    IsNull,
    IsNotNull,
}

/// Raw comparison operand as entered by the user. Parsing happens at
/// evaluation time against the target column's declared type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    #[default]
    None,
    Scalar(String),
    Range {
        from: String,
        to: String,
    },
}

impl FilterValue {
    /// An inert value makes the whole predicate pass unconditionally.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::None => true,
            FilterValue::Scalar(s) => s.trim().is_empty(),
            FilterValue::Range { from, to } => from.trim().is_empty() && to.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPredicate {
    pub column_key: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl FilterPredicate {
    pub fn new(
        column_key: impl Into<String>,
        operator: FilterOperator,
        value: FilterValue,
    ) -> Self {
        Self {
            column_key: column_key.into(),
            operator,
            value,
        }
    }

    pub fn scalar(
        column_key: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        Self::new(column_key, operator, FilterValue::Scalar(value.into()))
    }
}

/// Filter stage: keeps rows satisfying every predicate (AND) and, when the
/// trimmed search text is non-empty, matching at least one searchable
/// column case-insensitively (OR). Order-stable, side-effect free.
pub fn apply_filters(
    rows: &[Row],
    columns: &Columns,
    search: &str,
    predicates: &[FilterPredicate],
) -> Vec<Row> {
    let query = search.trim().to_lowercase();

    rows.iter()
        .filter(|row| {
            if !query.is_empty() && !matches_search(row, columns, &query) {
                return false;
            }
            predicates.iter().all(|p| matches_predicate(row, columns, p))
        })
        .cloned()
        .collect()
}

fn matches_search(row: &Row, columns: &Columns, query_lower: &str) -> bool {
    columns.iter().filter(|c| c.searchable()).any(|c| {
        row.get(&c.key)
            .map(|v| v.to_search_string().to_lowercase().contains(query_lower))
            .unwrap_or(false)
    })
}

fn matches_predicate(row: &Row, columns: &Columns, predicate: &FilterPredicate) -> bool {
    // Null checks apply regardless of any entered value.
    match predicate.operator {
        FilterOperator::IsNull => return row.is_missing_or_null(&predicate.column_key),
        FilterOperator::IsNotNull => return !row.is_missing_or_null(&predicate.column_key),
        _ => {}
    }

    if predicate.value.is_empty() {
        return true;
    }

    // A row without the target field never matches a value-carrying operator.
    let Some(cell) = row.get(&predicate.column_key) else {
        return false;
    };
    if cell.is_null() {
        return false;
    }

    let column_type = columns
        .get(&predicate.column_key)
        .map(|c| c.column_type)
        .unwrap_or_default();

    match column_type {
        ColumnType::Date | ColumnType::DateTime => {
            matches_temporal(cell, predicate.operator, &predicate.value)
        }
        ColumnType::Number => matches_numeric_first(cell, predicate.operator, &predicate.value),
        _ => matches_textual(cell, predicate.operator, &predicate.value),
    }
}

/// Date/datetime columns: both sides must parse to instants; anything
/// unparseable rejects the row (fail closed).
fn matches_temporal(cell: &CellValue, operator: FilterOperator, value: &FilterValue) -> bool {
    let Some(instant) = cell.as_datetime() else {
        return false;
    };

    match (operator, value) {
        (FilterOperator::Between, FilterValue::Range { from, to }) => {
            // Inclusive [from, to]; a blank bound leaves that side open.
            let from = from.trim();
            let to = to.trim();
            if !from.is_empty() {
                match parse_datetime(from) {
                    Some(lo) if instant >= lo => {}
                    _ => return false,
                }
            }
            if !to.is_empty() {
                match parse_datetime(to) {
                    Some(hi) if instant <= hi => {}
                    _ => return false,
                }
            }
            true
        }
        (op, FilterValue::Scalar(raw)) => {
            let raw = raw.trim();
            match op {
                // A date-only operand matches by calendar day, the way the
                // table's date filter inputs are used.
                FilterOperator::Equals | FilterOperator::NotEquals => {
                    let eq = if raw.len() == 10 {
                        instant.format("%Y-%m-%d").to_string() == raw
                    } else {
                        match parse_datetime(raw) {
                            Some(target) => instant == target,
                            None => return false,
                        }
                    };
                    (op == FilterOperator::Equals) == eq
                }
                FilterOperator::GreaterThan => match parse_datetime(raw) {
                    Some(target) => instant > target,
                    None => false,
                },
                FilterOperator::LessThan => match parse_datetime(raw) {
                    Some(target) => instant < target,
                    None => false,
                },
                // Substring operators fall back to the ISO rendering.
                _ => matches_textual(cell, op, &FilterValue::Scalar(raw.to_string())),
            }
        }
        _ => false,
    }
}

/// Number columns: ordering operators coerce both sides to f64 and fail
/// closed on NaN; equality and substring operators use stringified values.
fn matches_numeric_first(cell: &CellValue, operator: FilterOperator, value: &FilterValue) -> bool {
    match (operator, value) {
        (FilterOperator::GreaterThan, FilterValue::Scalar(raw)) => {
            match (cell.as_number(), raw.trim().parse::<f64>().ok()) {
                (Some(n), Some(bound)) => n > bound,
                _ => false,
            }
        }
        (FilterOperator::LessThan, FilterValue::Scalar(raw)) => {
            match (cell.as_number(), raw.trim().parse::<f64>().ok()) {
                (Some(n), Some(bound)) => n < bound,
                _ => false,
            }
        }
        (FilterOperator::Between, FilterValue::Range { from, to }) => {
            let Some(n) = cell.as_number() else {
                return false;
            };
            let from = from.trim();
            let to = to.trim();
            if !from.is_empty() {
                match from.parse::<f64>() {
                    Ok(lo) if n >= lo => {}
                    _ => return false,
                }
            }
            if !to.is_empty() {
                match to.parse::<f64>() {
                    Ok(hi) if n <= hi => {}
                    _ => return false,
                }
            }
            true
        }
        (op, value) => matches_textual(cell, op, value),
    }
}

/// Text/select columns and fallbacks: case-insensitive comparison on the
/// stringified value. Ordering operators still coerce numerically per the
/// filter contract and reject the row when either side is not a number.
fn matches_textual(cell: &CellValue, operator: FilterOperator, value: &FilterValue) -> bool {
    let haystack = cell.to_search_string().to_lowercase();

    match (operator, value) {
        (FilterOperator::Equals, FilterValue::Scalar(raw)) => haystack == raw.trim().to_lowercase(),
        (FilterOperator::NotEquals, FilterValue::Scalar(raw)) => {
            haystack != raw.trim().to_lowercase()
        }
        (FilterOperator::Contains, FilterValue::Scalar(raw)) => {
            haystack.contains(&raw.trim().to_lowercase())
        }
        (FilterOperator::StartsWith, FilterValue::Scalar(raw)) => {
            haystack.starts_with(&raw.trim().to_lowercase())
        }
        (FilterOperator::EndsWith, FilterValue::Scalar(raw)) => {
            haystack.ends_with(&raw.trim().to_lowercase())
        }
        (FilterOperator::GreaterThan, FilterValue::Scalar(raw)) => {
            match (cell.as_number(), raw.trim().parse::<f64>().ok()) {
                (Some(n), Some(bound)) => n > bound,
                _ => false,
            }
        }
        (FilterOperator::LessThan, FilterValue::Scalar(raw)) => {
            match (cell.as_number(), raw.trim().parse::<f64>().ok()) {
                (Some(n), Some(bound)) => n < bound,
                _ => false,
            }
        }
        (FilterOperator::Between, FilterValue::Range { from, to }) => {
            let from = from.trim().to_lowercase();
            let to = to.trim().to_lowercase();
            (from.is_empty() || haystack >= from) && (to.is_empty() || haystack <= to)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::Column;

    fn columns() -> Columns {
        Columns::new(vec![
            Column::new("id", "ID", ColumnType::Number).sortable(),
            Column::new("name", "Name", ColumnType::Text).sortable(),
            Column::new("age", "Age", ColumnType::Number),
            Column::new("joined", "Joined", ColumnType::Date),
            Column::new("actions", "Actions", ColumnType::Actions),
        ])
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new("1").with("id", 1).with("name", "Bob").with("age", 34).with("joined", "2025-01-15"),
            Row::new("2").with("id", 2).with("name", "ann").with("age", 28).with("joined", "2025-03-02"),
            Row::new("3").with("id", 3).with("name", "Céline").with("joined", "2025-02-20"),
        ]
    }

    #[test]
    fn test_empty_search_and_predicates_is_identity() {
        let rows = rows();
        let filtered = apply_filters(&rows, &columns(), "", &[]);
        assert_eq!(filtered, rows);
    }

    #[test]
    fn test_global_search_case_insensitive_substring() {
        let filtered = apply_filters(&rows(), &columns(), "an", &[]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn test_search_preserves_relative_order() {
        let filtered = apply_filters(&rows(), &columns(), "b", &[]);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);

        let all = apply_filters(&rows(), &columns(), "2025", &[]);
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_inert_predicate_is_identity() {
        let p = FilterPredicate::new("name", FilterOperator::Contains, FilterValue::None);
        assert_eq!(apply_filters(&rows(), &columns(), "", &[p]).len(), 3);

        let p = FilterPredicate::scalar("name", FilterOperator::Contains, "   ");
        assert_eq!(apply_filters(&rows(), &columns(), "", &[p]).len(), 3);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let ps = vec![
            FilterPredicate::scalar("joined", FilterOperator::GreaterThan, "2025-01-01"),
            FilterPredicate::scalar("name", FilterOperator::StartsWith, "b"),
        ];
        let filtered = apply_filters(&rows(), &columns(), "", &ps);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_non_numeric_operand_fails_closed() {
        // greater-than "abc" on a number column excludes every row
        let p = FilterPredicate::scalar("age", FilterOperator::GreaterThan, "abc");
        assert!(apply_filters(&rows(), &columns(), "", &[p]).is_empty());
    }

    #[test]
    fn test_non_numeric_cell_fails_closed() {
        let rows = vec![Row::new("1").with("age", "unknown")];
        let p = FilterPredicate::scalar("age", FilterOperator::LessThan, "10");
        assert!(apply_filters(&rows, &columns(), "", &[p]).is_empty());
    }

    #[test]
    fn test_missing_field_only_matches_is_null() {
        let rows = rows();
        // row 3 has no "age" cell
        let p = FilterPredicate::scalar("age", FilterOperator::Contains, "2");
        let filtered = apply_filters(&rows, &columns(), "", &[p]);
        assert!(filtered.iter().all(|r| r.id != "3"));

        let p = FilterPredicate::new("age", FilterOperator::IsNull, FilterValue::None);
        let filtered = apply_filters(&rows, &columns(), "", &[p]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");

        let p = FilterPredicate::new("age", FilterOperator::IsNotNull, FilterValue::None);
        assert_eq!(apply_filters(&rows, &columns(), "", &[p]).len(), 2);
    }

    #[test]
    fn test_date_between_inclusive() {
        let p = FilterPredicate::new(
            "joined",
            FilterOperator::Between,
            FilterValue::Range {
                from: "2025-01-15".into(),
                to: "2025-02-20".into(),
            },
        );
        let filtered = apply_filters(&rows(), &columns(), "", &[p]);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_date_between_open_ended() {
        let p = FilterPredicate::new(
            "joined",
            FilterOperator::Between,
            FilterValue::Range {
                from: "2025-02-01".into(),
                to: String::new(),
            },
        );
        let filtered = apply_filters(&rows(), &columns(), "", &[p]);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_invalid_date_fails_closed() {
        let rows = vec![Row::new("1").with("joined", "soon")];
        let p = FilterPredicate::scalar("joined", FilterOperator::Equals, "2025-01-15");
        assert!(apply_filters(&rows, &columns(), "", &[p]).is_empty());

        let p = FilterPredicate::scalar("joined", FilterOperator::GreaterThan, "not a date");
        assert!(apply_filters(&rows, &columns(), "", &[p]).is_empty());
    }

    #[test]
    fn test_date_equals_by_calendar_day() {
        let rows = vec![Row::new("1").with("joined", CellValue::DateTime(
            parse_datetime("2025-01-15T14:30:00").unwrap(),
        ))];
        let p = FilterPredicate::scalar("joined", FilterOperator::Equals, "2025-01-15");
        assert_eq!(apply_filters(&rows, &columns(), "", &[p]).len(), 1);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let ps = vec![FilterPredicate::scalar(
            "name",
            FilterOperator::Contains,
            "n",
        )];
        let once = apply_filters(&rows(), &columns(), "", &ps);
        let twice = apply_filters(&once, &columns(), "", &ps);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equals_case_insensitive_on_text() {
        let p = FilterPredicate::scalar("name", FilterOperator::Equals, "BOB");
        let filtered = apply_filters(&rows(), &columns(), "", &[p]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_not_equals() {
        let p = FilterPredicate::scalar("name", FilterOperator::NotEquals, "bob");
        let filtered = apply_filters(&rows(), &columns(), "", &[p]);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_ends_with() {
        let p = FilterPredicate::scalar("name", FilterOperator::EndsWith, "NN");
        let filtered = apply_filters(&rows(), &columns(), "", &[p]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }
}
