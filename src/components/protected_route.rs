//! Route guard component.
//!
//! Wraps a page and defers to `guard::guard_decision` for the redirect
//! ordering: loading placeholder, then login, then the forced password
//! change, then the role check.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::auth::{use_auth, AuthSessionStoreFields};
use crate::guard::{guard_decision, GuardOutcome};
use crate::models::UserRole;

#[component]
pub fn ProtectedRoute(
    /// Roles admitted to the wrapped page; empty means any authenticated user
    #[prop(optional)]
    allowed_roles: Vec<UserRole>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    move || {
        let loading = auth.loading().get();
        let user = auth.user().get();
        let path = location.pathname.get();
        match guard_decision(loading, user.as_ref(), &path, &allowed_roles) {
            GuardOutcome::Loading => view! {
                <div class="loading-container">
                    <p>"Chargement..."</p>
                </div>
            }
            .into_any(),
            GuardOutcome::RedirectLogin => view! { <Redirect path="/login"/> }.into_any(),
            GuardOutcome::RedirectChangePassword => {
                view! { <Redirect path="/change-password"/> }.into_any()
            }
            GuardOutcome::RedirectHome => view! { <Redirect path="/home"/> }.into_any(),
            GuardOutcome::Allow => children().into_any(),
        }
    }
}
