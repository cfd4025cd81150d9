//! Display formatting for dates and datetimes.
//!
//! Cells store ISO values; the table shows DD.MM.YYYY, the convention
//! used across the app.

use chrono::{NaiveDate, NaiveDateTime};

/// "2025-12-01" -> "01.12.2025"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// "2025-12-01T14:30:00" -> "01.12.2025 14:30"
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_date(&d), "01.12.2025");
    }

    #[test]
    fn test_format_datetime() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(format_datetime(&d), "01.12.2025 14:30");
    }
}
