//! Auth session store.
//!
//! Single-writer: only `login`, `logout` and `update_user` mutate the cached
//! user; every reader observes changes synchronously through the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{self, ApiError};
use crate::models::{LoginRequest, User};
use crate::session;

#[derive(Clone, Debug, Default, Store)]
pub struct AuthSession {
    /// Currently logged-in user, None when unauthenticated
    pub user: Option<User>,
    /// True until the persisted session has been read once at startup
    pub loading: bool,
}

pub type AuthStore = Store<AuthSession>;

/// Provide the store at the app root. Starts in the loading state until
/// `init` has read the persisted session.
pub fn provide_auth() -> AuthStore {
    let store = Store::new(AuthSession {
        user: None,
        loading: true,
    });
    provide_context(store);
    store
}

/// Get the auth store from context
pub fn use_auth() -> AuthStore {
    expect_context::<AuthStore>()
}

/// One-time startup read of the persisted token/user pair.
pub fn init(store: AuthStore) {
    store.user().set(session::user());
    store.loading().set(false);
}

pub async fn login(store: AuthStore, credentials: LoginRequest) -> Result<User, ApiError> {
    let response = api::auth::login(&credentials).await?;
    session::save(&response.token, &response.user);
    store.user().set(Some(response.user.clone()));
    Ok(response.user)
}

pub fn logout(store: AuthStore) {
    session::clear();
    store.user().set(None);
}

/// Overwrite the cached user after a change already confirmed server-side.
pub fn update_user(store: AuthStore, user: User) {
    session::store_user(&user);
    store.user().set(Some(user));
}
