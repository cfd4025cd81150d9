use serde::{Deserialize, Serialize};

/// Assembled signup form, keyed by field name. The field set is dynamic
/// (served by the signup-fields endpoint), so the payload is a map rather
/// than a fixed struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub fields: std::collections::BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}
