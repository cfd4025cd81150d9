//! Column set and form/filter schemas for the users table.

use contracts::forms::{FieldSchema, FieldType, SelectOption};
use contracts::table::{Column, ColumnType, Columns};

pub const STATUS_OPTIONS: [&str; 3] = ["Active", "Inactive", "Pending"];

pub fn columns() -> Columns {
    Columns::new(vec![
        Column::new("id", "ID", ColumnType::Number).sortable().width(70),
        Column::new("firstname", "First Name", ColumnType::Text).sortable(),
        Column::new("lastname", "Last Name", ColumnType::Text).sortable(),
        Column::new("email", "Email", ColumnType::Text).sortable().width(200),
        Column::new("mobile", "Mobile number", ColumnType::Text).sortable().width(200),
        Column::new("country", "Country", ColumnType::Select).sortable(),
        Column::new("status", "Status", ColumnType::Select).sortable(),
        Column::new("dob", "Date of Birth", ColumnType::Date).sortable().width(140),
        Column::new("subscriptionexpdate", "Subscription Expiry", ColumnType::DateTime)
            .sortable()
            .width(200),
        Column::new("actions", "Actions", ColumnType::Actions).width(120),
    ])
}

fn status_options() -> Vec<SelectOption> {
    STATUS_OPTIONS.iter().map(|s| SelectOption::plain(*s)).collect()
}

fn country_options(countries: &[String]) -> Vec<SelectOption> {
    countries.iter().map(|c| SelectOption::plain(c.clone())).collect()
}

/// Fields of the create/edit dialog. Ids are assigned by the page, so the
/// dialog carries no id field.
pub fn create_schema(countries: &[String]) -> Vec<FieldSchema> {
    vec![
        FieldSchema::new("firstname", "First Name", FieldType::Text)
            .required()
            .max_length(50),
        FieldSchema::new("lastname", "Last Name", FieldType::Text)
            .required()
            .max_length(50),
        FieldSchema::new("email", "Email", FieldType::Email)
            .required()
            .max_length(100),
        FieldSchema::new("mobile", "Mobile Number", FieldType::Text)
            .required()
            .max_length(20),
        FieldSchema::new("country", "Country", FieldType::Select)
            .options(country_options(countries))
            .required()
            .default_value("India"),
        FieldSchema::new("status", "Status", FieldType::Select)
            .options(status_options())
            .required()
            .default_value("Active"),
        FieldSchema::new("dob", "Date of Birth", FieldType::Date),
        FieldSchema::new("subscriptionexpdate", "Subscription Expiry Date", FieldType::DateTime),
    ]
}

/// Fields of the table's filter row.
pub fn search_schema(countries: &[String]) -> Vec<FieldSchema> {
    vec![
        FieldSchema::new("firstname", "First Name", FieldType::Text),
        FieldSchema::new("lastname", "Last Name", FieldType::Text),
        FieldSchema::new("email", "Email", FieldType::Text),
        FieldSchema::new("mobile", "Mobile Number", FieldType::Text),
        FieldSchema::new("country", "Country", FieldType::Select)
            .options(country_options(countries)),
        FieldSchema::new("status", "Status", FieldType::Select).options(status_options()),
        FieldSchema::new("dob", "Date of Birth", FieldType::DateRange),
        FieldSchema::new("subscriptionexpdate", "Subscription Expiry", FieldType::DateTimeRange),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_filter_field_has_a_column() {
        let columns = columns();
        for field in search_schema(&["India".to_string()]) {
            assert!(columns.contains(&field.name), "missing column {}", field.name);
        }
    }

    #[test]
    fn test_create_schema_matches_columns() {
        let columns = columns();
        for field in create_schema(&["India".to_string()]) {
            assert!(columns.contains(&field.name), "missing column {}", field.name);
        }
    }

    #[test]
    fn test_actions_column_not_sortable() {
        let columns = columns();
        assert!(!columns.is_sortable("actions"));
        assert!(columns.is_sortable("subscriptionexpdate"));
    }
}
