use contracts::forms::{FieldSchema, FieldType, SelectOption};
use contracts::system::auth::SignupRequest;

use crate::shared::api_utils::post_json_unit;
use crate::shared::endpoints;

/// Submit the assembled signup form to the placeholder endpoint.
pub async fn signup(request: &SignupRequest) -> Result<(), String> {
    post_json_unit(endpoints::SIGNUP, request).await
}

/// Fetch the dynamic signup field schema. The demo backend is usually not
/// running, so callers fall back to [`mock_signup_fields`].
pub async fn fetch_signup_fields() -> Result<Vec<FieldSchema>, String> {
    crate::shared::api_utils::get_json(endpoints::SIGNUP_FIELDS).await
}

/// Redirect the window to the provider's OAuth start route.
pub fn start_social_login(provider: &str) -> Result<(), String> {
    let url = endpoints::social_login_url(provider);
    let window = web_sys::window().ok_or("No window available")?;
    window
        .location()
        .set_href(&url)
        .map_err(|_| format!("Unable to start {} login", provider))
}

/// Built-in signup schema, used when the fields endpoint is unreachable.
pub fn mock_signup_fields() -> Vec<FieldSchema> {
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
        FieldSchema::new("dob", "Date of Birth", FieldType::Date),
        FieldSchema::new("course", "Course", FieldType::Select)
            .options(vec![
                SelectOption::new("react", "React Fundamentals"),
                SelectOption::new("js", "Advanced JavaScript"),
                SelectOption::new("fullstack", "Full Stack Development"),
            ])
            .required()
            .default_value("react"),
        FieldSchema::new("college", "College", FieldType::Text).max_length(100),
        FieldSchema::new("mark10", "10th Mark (%)", FieldType::Number).default_value("0"),
        FieldSchema::new("mark12", "12th Mark (%)", FieldType::Number).default_value("0"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::forms::{initial_values, validate_required};

    #[test]
    fn test_mock_fields_seed_valid_select() {
        let fields = mock_signup_fields();
        let values = initial_values(&fields);
        assert_eq!(values["course"], "react");
        // required text fields start empty and must fail validation
        let errors = validate_required(&fields, &values);
        assert!(errors.contains_key("firstname"));
        assert!(!errors.contains_key("course"));
    }
}
