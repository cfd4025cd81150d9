use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const USERNAME_KEY: &str = "auth_username";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Remember who logged in so the session survives a reload.
pub fn save_username(username: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(USERNAME_KEY, username);
    }
}

pub fn get_username() -> Option<String> {
    get_local_storage()?.get_item(USERNAME_KEY).ok()?
}

/// Clear the stored session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}
