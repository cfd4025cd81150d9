use serde::{Deserialize, Serialize};

/// Declared shape of a column's values. Drives operator semantics in the
/// filter stage and comparator choice in the sort stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Date,
    DateTime,
    Select,
    /// Pseudo-column rendering row action buttons; never searched or sorted.
    Actions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub column_type: ColumnType,
    pub sortable: bool,
    /// Fixed width in pixels; `None` lets the table lay the column out.
    pub width: Option<u16>,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            column_type,
            sortable: false,
            width: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, px: u16) -> Self {
        self.width = Some(px);
        self
    }

    /// Whether the global search looks at this column.
    pub fn searchable(&self) -> bool {
        self.column_type != ColumnType::Actions
    }
}

/// Ordered column set with unique keys. Order defines display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Columns(Vec<Column>);

impl Columns {
    /// Builds the set, dropping any column whose key repeats an earlier one.
    pub fn new(columns: Vec<Column>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let unique = columns
            .into_iter()
            .filter(|c| seen.insert(c.key.clone()))
            .collect();
        Self(unique)
    }

    pub fn get(&self, key: &str) -> Option<&Column> {
        self.0.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// True when the key names a column that accepts sort entries.
    pub fn is_sortable(&self, key: &str) -> bool {
        self.get(key).map(|c| c.sortable).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_keys_dropped() {
        let cols = Columns::new(vec![
            Column::new("id", "ID", ColumnType::Number),
            Column::new("id", "ID again", ColumnType::Text),
            Column::new("name", "Name", ColumnType::Text),
        ]);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols.get("id").unwrap().label, "ID");
    }

    #[test]
    fn test_actions_not_searchable() {
        let col = Column::new("actions", "Actions", ColumnType::Actions);
        assert!(!col.searchable());
    }

    #[test]
    fn test_sortable_flag() {
        let cols = Columns::new(vec![
            Column::new("name", "Name", ColumnType::Text).sortable(),
            Column::new("note", "Note", ColumnType::Text),
        ]);
        assert!(cols.is_sortable("name"));
        assert!(!cols.is_sortable("note"));
        assert!(!cols.is_sortable("missing"));
    }
}
