use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single table cell. Closed set of scalar shapes a row may carry;
/// replaces untyped per-key lookup with an explicit enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum CellValue {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Stringified form used for global search and case-insensitive
    /// operators. Dates render in ISO form so a "2025-12" search matches.
    pub fn to_search_string(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// Numeric coercion for `GreaterThan` / `LessThan` / numeric `Between`.
    /// `None` means "not a number" and the comparison fails closed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Datetime coercion for date-typed comparisons. Plain dates count as
    /// midnight, so date and datetime cells compare on one axis.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Date(d) => d.and_hms_opt(0, 0, 0),
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::Text(s) => parse_datetime(s),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Parse user-entered text into an instant. Accepts ISO dates
/// ("2025-12-01"), datetime-local values ("2025-12-01T14:30" with optional
/// seconds) and space-separated datetimes. Anything else is `None`.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Integral numbers render without a trailing ".0" so search and Equals
/// behave the way users type them.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_string_numbers() {
        assert_eq!(CellValue::Number(42.0).to_search_string(), "42");
        assert_eq!(CellValue::Number(3.5).to_search_string(), "3.5");
        assert_eq!(CellValue::Null.to_search_string(), "");
    }

    #[test]
    fn test_as_number_coercion() {
        assert_eq!(CellValue::Text(" 7 ".into()).as_number(), Some(7.0));
        assert_eq!(CellValue::Text("abc".into()).as_number(), None);
        assert_eq!(CellValue::Date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).as_number(), None);
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert!(parse_datetime("2025-12-01").is_some());
        assert!(parse_datetime("2025-12-01T14:30").is_some());
        assert!(parse_datetime("2025-12-01T14:30:00").is_some());
        assert!(parse_datetime("2025-12-01 14:30:00").is_some());
        assert!(parse_datetime("not a date").is_none());
        assert!(parse_datetime("").is_none());
    }

    #[test]
    fn test_date_and_datetime_share_axis() {
        let d = CellValue::Date(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        let dt = parse_datetime("2025-12-01T00:00").unwrap();
        assert_eq!(d.as_datetime(), Some(dt));
    }
}
