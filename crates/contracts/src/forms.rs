//! Schema-driven forms: field definitions consumed by the dynamic form
//! dialog and the table's filter row. The same schema shape is served by
//! the signup-fields endpoint, so everything here is serde-friendly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Date,
    DateTime,
    /// Two date inputs; the value is serialized as "start,end".
    DateRange,
    DateTimeRange,
    Select,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose stored value equals its label, the common case for
    /// status/country style selects.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub max_length: Option<u32>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            required: false,
            disabled: false,
            options: Vec::new(),
            default_value: None,
            placeholder: None,
            max_length: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    pub fn max_length(mut self, length: u32) -> Self {
        self.max_length = Some(length);
        self
    }
}

/// Assembled form state, field name -> raw string value.
pub type FormValues = BTreeMap<String, String>;

/// Seeds form values: an explicit default wins, a select falls back to its
/// first option, everything else starts empty.
pub fn initial_values(fields: &[FieldSchema]) -> FormValues {
    fields
        .iter()
        .map(|f| {
            let value = match &f.default_value {
                Some(v) => v.clone(),
                None if f.field_type == FieldType::Select => f
                    .options
                    .first()
                    .map(|o| o.value.clone())
                    .unwrap_or_default(),
                None => String::new(),
            };
            (f.name.clone(), value)
        })
        .collect()
}

/// Required-and-empty is the only validation the form layer does; format
/// and range checks belong to whoever consumes the submitted values.
pub fn validate_required(fields: &[FieldSchema], values: &FormValues) -> BTreeMap<String, String> {
    fields
        .iter()
        .filter(|f| f.required)
        .filter(|f| {
            values
                .get(&f.name)
                .map(|v| v.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|f| (f.name.clone(), format!("{} is required", f.label)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<FieldSchema> {
        vec![
            FieldSchema::new("firstname", "First Name", FieldType::Text).required(),
            FieldSchema::new("email", "Email", FieldType::Email).required(),
            FieldSchema::new("status", "Status", FieldType::Select)
                .options(vec![
                    SelectOption::plain("Active"),
                    SelectOption::plain("Inactive"),
                ])
                .required(),
            FieldSchema::new("note", "Note", FieldType::TextArea),
            FieldSchema::new("country", "Country", FieldType::Select)
                .options(vec![SelectOption::plain("India")])
                .default_value("Japan"),
        ]
    }

    #[test]
    fn test_initial_values_defaults() {
        let values = initial_values(&fields());
        assert_eq!(values["firstname"], "");
        // select without explicit default takes its first option
        assert_eq!(values["status"], "Active");
        // explicit default wins over the option list
        assert_eq!(values["country"], "Japan");
    }

    #[test]
    fn test_validate_required_only() {
        let fields = fields();
        let mut values = initial_values(&fields);
        let errors = validate_required(&fields, &values);
        assert!(errors.contains_key("firstname"));
        assert!(errors.contains_key("email"));
        // selects are pre-filled, so no error
        assert!(!errors.contains_key("status"));
        // optional empty field passes
        assert!(!errors.contains_key("note"));

        values.insert("firstname".into(), "Ann".into());
        values.insert("email".into(), "not-an-email".into());
        // format is intentionally not validated here
        assert!(validate_required(&fields, &values).is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let fields = vec![FieldSchema::new("name", "Name", FieldType::Text).required()];
        let mut values = FormValues::new();
        values.insert("name".into(), "   ".into());
        assert_eq!(validate_required(&fields, &values).len(), 1);
    }

    #[test]
    fn test_schema_deserializes_with_defaults() {
        // The signup-fields endpoint sends only the interesting keys.
        let json = r#"[{"name":"username","label":"Username","required":true}]"#;
        let fields: Vec<FieldSchema> = serde_json::from_str(json).unwrap();
        assert_eq!(fields[0].field_type, FieldType::Text);
        assert!(fields[0].required);
        assert!(fields[0].options.is_empty());
    }
}
