use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::CellValue;

/// One table record: a stable string identifier plus cells keyed by column
/// key. Rows are treated as immutable; edits produce a new collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Builder-style cell insertion, used by sample data and create handlers.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    /// Cell lookup. Absent keys and explicit `Null` read the same way for
    /// the engine: `get` returns `None` for both only when the key is
    /// missing; callers that care use [`Row::is_missing_or_null`].
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    pub fn is_missing_or_null(&self, key: &str) -> bool {
        self.cells.get(key).map(CellValue::is_null).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_read_alike() {
        let row = Row::new("1").with("name", "Ann").with("email", CellValue::Null);
        assert!(!row.is_missing_or_null("name"));
        assert!(row.is_missing_or_null("email"));
        assert!(row.is_missing_or_null("no_such_key"));
    }
}
