use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::storage;

/// Demo authentication: any validated login mints a local token. The state
/// shape matches what a real token endpoint would return, so swapping the
/// demo for a backend touches only `do_login`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
}

const DEMO_TOKEN: &str = "demo-token";

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // Restore the session from localStorage on mount.
    let initial = match (storage::get_access_token(), storage::get_username()) {
        (Some(token), Some(username)) => AuthState {
            access_token: Some(token),
            user: Some(demo_user(&username)),
        },
        _ => AuthState::default(),
    };

    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store the demo session and flip the app into the authenticated shell.
pub fn do_login(set_auth_state: WriteSignal<AuthState>, username: &str) {
    storage::save_access_token(DEMO_TOKEN);
    storage::save_username(username);

    set_auth_state.set(AuthState {
        access_token: Some(DEMO_TOKEN.to_string()),
        user: Some(demo_user(username)),
    });
}

/// Clear the session; the router falls back to the login page.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

fn demo_user(username: &str) -> UserInfo {
    UserInfo {
        id: format!("user-{}", username.to_lowercase()),
        username: username.to_string(),
        full_name: None,
        email: None,
    }
}
