//! In-memory sample users shown on the dashboard. A real deployment would
//! page these from an API endpoint.

use chrono::NaiveDate;
use contracts::table::{CellValue, Row};

fn date(y: i32, m: u32, d: u32) -> CellValue {
    NaiveDate::from_ymd_opt(y, m, d)
        .map(CellValue::Date)
        .unwrap_or(CellValue::Null)
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> CellValue {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .map(CellValue::DateTime)
        .unwrap_or(CellValue::Null)
}

fn user(
    id: i64,
    firstname: &str,
    lastname: &str,
    mobile: &str,
    country: &str,
    status: &str,
    dob: CellValue,
    expiry: CellValue,
) -> Row {
    let email = format!(
        "{}.{}@example.com",
        firstname.to_lowercase(),
        lastname.to_lowercase()
    );
    Row::new(id.to_string())
        .with("id", id)
        .with("firstname", firstname)
        .with("lastname", lastname)
        .with("email", email)
        .with("mobile", mobile)
        .with("country", country)
        .with("status", status)
        .with("dob", dob)
        .with("subscriptionexpdate", expiry)
}

pub fn sample_users() -> Vec<Row> {
    vec![
        user(1, "John", "Doe", "+1 (555) 123-4567", "India", "Active",
            date(1994, 3, 12), datetime(2025, 12, 1, 14, 30)),
        user(2, "Jane", "Smith", "+1 (555) 234-5678", "Canada", "Active",
            date(1991, 7, 4), datetime(2025, 12, 2, 14, 30)),
        user(3, "Bob", "Johnson", "+44 (0) 20 7946 0958", "India", "Inactive",
            date(1988, 11, 23), datetime(2025, 12, 3, 14, 30)),
        user(4, "Alice", "Williams", "+61 2 9999 9999", "Japan", "Active",
            date(1996, 2, 17), datetime(2025, 12, 4, 14, 30)),
        user(5, "Charlie", "Brown", "+33 1 42 34 56 78", "Japan", "Pending",
            date(1990, 9, 30), datetime(2025, 12, 5, 14, 30)),
        user(6, "Diana", "Prince", "+49 30 1234 5678", "India", "Active",
            date(1993, 5, 8), datetime(2025, 12, 6, 14, 30)),
        user(7, "Edward", "Norton", "+81 3-1234-5678", "China", "Active",
            date(1985, 12, 1), datetime(2025, 12, 7, 14, 30)),
        user(8, "Fiona", "Green", "+39 06 1234 5678", "China", "Inactive",
            date(1997, 8, 19), datetime(2025, 12, 8, 14, 30)),
        user(9, "George", "Hall", "+1 (555) 876-5432", "Canada", "Pending",
            date(1992, 1, 26), datetime(2025, 12, 9, 9, 0)),
        user(10, "Hannah", "Lee", "+82 2-312-3456", "China", "Active",
            date(1999, 4, 14), datetime(2025, 12, 10, 9, 0)),
        // No subscription yet: exercises the null handling in sort/filter.
        user(11, "Ivan", "Petrov", "+7 495 123-45-67", "India", "Pending",
            date(1995, 10, 2), CellValue::Null),
        user(12, "Julia", "Santos", "+55 11 91234-5678", "Japan", "Active",
            CellValue::Null, datetime(2025, 12, 12, 18, 15)),
    ]
}

/// Next free numeric id, used when the create dialog leaves id assignment
/// to the page.
pub fn next_user_id(rows: &[Row]) -> i64 {
    rows.iter()
        .filter_map(|r| r.get("id").and_then(|v| v.as_number()))
        .fold(0i64, |max, n| max.max(n as i64))
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_unique() {
        let rows = sample_users();
        let mut ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn test_next_user_id() {
        let rows = sample_users();
        assert_eq!(next_user_id(&rows), 13);
        assert_eq!(next_user_id(&[]), 1);
    }
}
