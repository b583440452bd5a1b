//! Persisted auth session (token + user) in browser local storage.
//!
//! Eventually consistent with the server; callers treat it as a hint and
//! refetch full objects after mutating actions.

use web_sys::Storage;

use crate::models::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn save(token: &str, user: &User) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub fn token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn user() -> Option<User> {
    let json = storage()?.get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

/// Overwrite the cached user only. Used after self-service profile changes
/// already confirmed server-side.
pub fn store_user(user: &User) {
    if let Some(storage) = storage() {
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
