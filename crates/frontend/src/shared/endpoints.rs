//! Placeholder endpoint registry. Everything here points at public demo
//! services or local OAuth stubs; swap for real backend routes when one
//! exists.

/// Public dataset used for the country select options.
pub const COUNTRIES: &str = "https://restcountries.com/v3.1/all?fields=name";

/// Returns the dynamic signup field schema. Unreachable in the demo; the
/// auth page falls back to its built-in schema.
pub const SIGNUP_FIELDS: &str = "http://localhost:4000/auth/signup-fields";

/// Accepts the assembled signup form.
pub const SIGNUP: &str = "http://localhost:4000/auth/signup";

/// Generic social auth entry; a `provider=` query param is appended when
/// no provider-specific route is configured.
pub const SOCIAL_AUTH_URL: &str = "http://localhost:4000/auth/social";

/// Provider-specific OAuth starts (these redirect to the provider).
pub fn social_login_url(provider: &str) -> String {
    match provider {
        "google" => "http://localhost:4000/auth/google".to_string(),
        "github" => "http://localhost:4000/auth/github".to_string(),
        other => {
            let sep = if SOCIAL_AUTH_URL.contains('?') { '&' } else { '?' };
            format!("{}{}provider={}", SOCIAL_AUTH_URL, sep, other.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_providers_have_dedicated_routes() {
        assert!(social_login_url("google").ends_with("/auth/google"));
        assert!(social_login_url("github").ends_with("/auth/github"));
    }

    #[test]
    fn test_unknown_provider_uses_generic_route() {
        assert_eq!(
            social_login_url("GitLab"),
            "http://localhost:4000/auth/social?provider=gitlab"
        );
    }
}
