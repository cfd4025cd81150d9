use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::column::{ColumnType, Columns};
use super::row::Row;
use super::value::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One (column, direction) pair of the active multi-key sort. The active
/// sort is an ordered sequence; the first entry has the highest priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortEntry {
    pub column_key: String,
    pub direction: SortDirection,
}

impl SortEntry {
    pub fn asc(column_key: impl Into<String>) -> Self {
        Self {
            column_key: column_key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(column_key: impl Into<String>) -> Self {
        Self {
            column_key: column_key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Sort stage: stable multi-key ordering. Ties under entry N fall through
/// to entry N+1; rows tied under every entry keep their input order.
/// Returns a new vector; the input is untouched.
pub fn sort_rows(rows: &[Row], columns: &Columns, entries: &[SortEntry]) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    if entries.is_empty() {
        return sorted;
    }

    // Vec::sort_by is stable, which gives the fall-through tie behavior
    // for free once entries are compared in priority order.
    sorted.sort_by(|a, b| {
        for entry in entries {
            let column_type = columns
                .get(&entry.column_key)
                .map(|c| c.column_type)
                .unwrap_or_default();
            let ord = compare_cells(
                a.get(&entry.column_key),
                b.get(&entry.column_key),
                column_type,
                entry.direction,
            );
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
    sorted
}

/// Per-entry comparison. Nulls and missing values order after every
/// defined value in either direction; the direction flip applies only to
/// the relative order of defined values.
fn compare_cells(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    column_type: ColumnType,
    direction: SortDirection,
) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = compare_defined(a, b, column_type);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }
}

fn compare_defined(a: &CellValue, b: &CellValue, column_type: ColumnType) -> Ordering {
    match column_type {
        ColumnType::Number => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            // Non-numeric stragglers in a number column group after numbers.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => compare_text(a, b),
        },
        ColumnType::Date | ColumnType::DateTime => match (a.as_datetime(), b.as_datetime()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => compare_text(a, b),
        },
        _ => match (a, b) {
            (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
            (CellValue::Number(x), CellValue::Number(y)) => {
                x.partial_cmp(y).unwrap_or(Ordering::Equal)
            }
            _ => compare_text(a, b),
        },
    }
}

/// Case-insensitive text ordering, with the original spelling as the
/// tiebreaker so "ann" and "Ann" order deterministically.
fn compare_text(a: &CellValue, b: &CellValue) -> Ordering {
    let x = a.to_search_string();
    let y = b.to_search_string();
    x.to_lowercase()
        .cmp(&y.to_lowercase())
        .then_with(|| x.cmp(&y))
}

/// Header-click cycling: unset -> Ascending -> Descending -> unset.
///
/// A plain click (`additive == false`) replaces the whole sequence with the
/// clicked column's next state; a modified click (`additive == true`)
/// advances only that column inside the existing sequence. Columns the
/// schema does not mark sortable are ignored.
pub fn toggle_sort(
    entries: &[SortEntry],
    columns: &Columns,
    column_key: &str,
    additive: bool,
) -> Vec<SortEntry> {
    if !columns.is_sortable(column_key) {
        return entries.to_vec();
    }

    let current = entries.iter().find(|e| e.column_key == column_key);
    let next = match current.map(|e| e.direction) {
        None => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => None,
    };

    if !additive {
        return match next {
            Some(direction) => vec![SortEntry {
                column_key: column_key.to_string(),
                direction,
            }],
            None => Vec::new(),
        };
    }

    let mut updated: Vec<SortEntry> = Vec::with_capacity(entries.len() + 1);
    let mut seen = false;
    for entry in entries {
        if entry.column_key == column_key {
            seen = true;
            if let Some(direction) = next {
                updated.push(SortEntry {
                    column_key: column_key.to_string(),
                    direction,
                });
            }
            // next == None drops the entry, keeping the others in place.
        } else {
            updated.push(entry.clone());
        }
    }
    if !seen {
        updated.push(SortEntry::asc(column_key));
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::Column;

    fn columns() -> Columns {
        Columns::new(vec![
            Column::new("name", "Name", ColumnType::Text).sortable(),
            Column::new("age", "Age", ColumnType::Number).sortable(),
            Column::new("joined", "Joined", ColumnType::Date).sortable(),
            Column::new("note", "Note", ColumnType::Text),
        ])
    }

    fn names(rows: &[Row]) -> Vec<String> {
        rows.iter()
            .map(|r| r.get("name").map(|v| v.to_search_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_case_insensitive_text_sort() {
        // lowercase "ann" must come before "Bob" despite 'B' < 'a' in ASCII
        let rows = vec![
            Row::new("1").with("name", "Bob"),
            Row::new("2").with("name", "ann"),
        ];
        let sorted = sort_rows(&rows, &columns(), &[SortEntry::asc("name")]);
        assert_eq!(names(&sorted), vec!["ann", "Bob"]);
    }

    #[test]
    fn test_sort_preserves_multiset() {
        let rows = vec![
            Row::new("1").with("name", "b").with("age", 2),
            Row::new("2").with("name", "a").with("age", 1),
            Row::new("3").with("name", "a").with("age", 3),
        ];
        let sorted = sort_rows(&rows, &columns(), &[SortEntry::desc("age")]);
        assert_eq!(sorted.len(), rows.len());
        let mut in_ids: Vec<_> = rows.iter().map(|r| r.id.clone()).collect();
        let mut out_ids: Vec<_> = sorted.iter().map(|r| r.id.clone()).collect();
        in_ids.sort();
        out_ids.sort();
        assert_eq!(in_ids, out_ids);
    }

    #[test]
    fn test_multi_key_tiebreak() {
        let rows = vec![
            Row::new("1").with("name", "ann").with("age", 40),
            Row::new("2").with("name", "bob").with("age", 25),
            Row::new("3").with("name", "ann").with("age", 25),
        ];
        let entries = vec![SortEntry::asc("name"), SortEntry::desc("age")];
        let sorted = sort_rows(&rows, &columns(), &entries);
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);
    }

    #[test]
    fn test_stability_on_full_tie() {
        let rows = vec![
            Row::new("first").with("name", "same").with("age", 1),
            Row::new("second").with("name", "same").with("age", 2),
        ];
        let sorted = sort_rows(&rows, &columns(), &[SortEntry::asc("name")]);
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);

        let sorted = sort_rows(&rows, &columns(), &[SortEntry::desc("name")]);
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_nulls_last_in_both_directions() {
        let rows = vec![
            Row::new("1"), // no age at all
            Row::new("2").with("age", 30),
            Row::new("3").with("age", CellValue::Null),
            Row::new("4").with("age", 10),
        ];
        let asc = sort_rows(&rows, &columns(), &[SortEntry::asc("age")]);
        let ids: Vec<&str> = asc.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(&ids[..2], &["4", "2"]);
        assert!(ids[2..].contains(&"1") && ids[2..].contains(&"3"));

        let desc = sort_rows(&rows, &columns(), &[SortEntry::desc("age")]);
        let ids: Vec<&str> = desc.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(&ids[..2], &["2", "4"]);
        assert!(ids[2..].contains(&"1") && ids[2..].contains(&"3"));
    }

    #[test]
    fn test_date_sort_chronological() {
        let rows = vec![
            Row::new("1").with("joined", "2025-03-02"),
            Row::new("2").with("joined", "2025-01-15"),
        ];
        let sorted = sort_rows(&rows, &columns(), &[SortEntry::asc("joined")]);
        assert_eq!(sorted[0].id, "2");
    }

    #[test]
    fn test_empty_entries_keep_order() {
        let rows = vec![
            Row::new("1").with("name", "z"),
            Row::new("2").with("name", "a"),
        ];
        let sorted = sort_rows(&rows, &columns(), &[]);
        assert_eq!(sorted, rows);
    }

    #[test]
    fn test_toggle_cycle_plain_click() {
        let cols = columns();
        let s1 = toggle_sort(&[], &cols, "name", false);
        assert_eq!(s1, vec![SortEntry::asc("name")]);

        let s2 = toggle_sort(&s1, &cols, "name", false);
        assert_eq!(s2, vec![SortEntry::desc("name")]);

        let s3 = toggle_sort(&s2, &cols, "name", false);
        assert!(s3.is_empty());
    }

    #[test]
    fn test_plain_click_resets_other_columns() {
        let cols = columns();
        let entries = vec![SortEntry::asc("name"), SortEntry::desc("age")];
        let next = toggle_sort(&entries, &cols, "joined", false);
        assert_eq!(next, vec![SortEntry::asc("joined")]);
    }

    #[test]
    fn test_additive_click_keeps_sequence() {
        let cols = columns();
        let entries = vec![SortEntry::asc("name")];

        let next = toggle_sort(&entries, &cols, "age", true);
        assert_eq!(next, vec![SortEntry::asc("name"), SortEntry::asc("age")]);

        let next = toggle_sort(&next, &cols, "name", true);
        assert_eq!(next, vec![SortEntry::desc("name"), SortEntry::asc("age")]);

        // descending -> removed, the other entry stays
        let next = toggle_sort(&next, &cols, "name", true);
        assert_eq!(next, vec![SortEntry::asc("age")]);
    }

    #[test]
    fn test_unsortable_column_ignored() {
        let cols = columns();
        let entries = vec![SortEntry::asc("name")];
        let next = toggle_sort(&entries, &cols, "note", false);
        assert_eq!(next, entries);
    }
}
