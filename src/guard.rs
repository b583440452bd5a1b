//! Route guarding decision.
//!
//! Pure so the redirect ordering can be unit tested; the `ProtectedRoute`
//! component only maps the outcome to a placeholder, a redirect, or the page.

use crate::models::{User, UserRole};

pub const CHANGE_PASSWORD_PATH: &str = "/change-password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Auth state still initializing, render a placeholder.
    Loading,
    RedirectLogin,
    RedirectChangePassword,
    RedirectHome,
    Allow,
}

/// Ordering matters: loading, then authentication, then the forced password
/// change (exempting the change-password page itself), then the role check.
/// An empty `allowed_roles` means any authenticated user.
pub fn guard_decision(
    loading: bool,
    user: Option<&User>,
    path: &str,
    allowed_roles: &[UserRole],
) -> GuardOutcome {
    if loading {
        return GuardOutcome::Loading;
    }
    let Some(user) = user else {
        return GuardOutcome::RedirectLogin;
    };
    if user.must_change_password && path != CHANGE_PASSWORD_PATH {
        return GuardOutcome::RedirectChangePassword;
    }
    if !allowed_roles.is_empty() && !allowed_roles.contains(&user.role) {
        return GuardOutcome::RedirectHome;
    }
    GuardOutcome::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole, must_change_password: bool) -> User {
        User {
            id: 1,
            firstname: "Alex".into(),
            lastname: "Durand".into(),
            email: "alex@exemple.fr".into(),
            phone: None,
            birthdate: None,
            role,
            address: None,
            is_active: true,
            must_change_password,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn unauthenticated_visit_redirects_to_login() {
        for path in ["/profile", "/applications", "/users", "/my-applications"] {
            assert_eq!(
                guard_decision(false, None, path, &[]),
                GuardOutcome::RedirectLogin
            );
        }
    }

    #[test]
    fn candidat_on_users_page_redirects_home() {
        let u = user(UserRole::Candidat, false);
        assert_eq!(
            guard_decision(false, Some(&u), "/users", &[UserRole::Admin]),
            GuardOutcome::RedirectHome
        );
    }

    #[test]
    fn rh_and_admin_reach_management_pages() {
        let allowed = [UserRole::Rh, UserRole::Admin];
        for role in [UserRole::Rh, UserRole::Admin] {
            let u = user(role, false);
            assert_eq!(
                guard_decision(false, Some(&u), "/applications", &allowed),
                GuardOutcome::Allow
            );
        }
    }

    #[test]
    fn forced_password_change_precedes_role_checks() {
        let u = user(UserRole::Candidat, true);
        // Even a route the role could never reach redirects to change-password first.
        assert_eq!(
            guard_decision(false, Some(&u), "/users", &[UserRole::Admin]),
            GuardOutcome::RedirectChangePassword
        );
        assert_eq!(
            guard_decision(false, Some(&u), "/profile", &[]),
            GuardOutcome::RedirectChangePassword
        );
        // The change-password page itself stays reachable.
        assert_eq!(
            guard_decision(false, Some(&u), CHANGE_PASSWORD_PATH, &[]),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn loading_takes_precedence_over_everything() {
        let u = user(UserRole::Admin, true);
        assert_eq!(
            guard_decision(true, Some(&u), "/users", &[UserRole::Admin]),
            GuardOutcome::Loading
        );
        assert_eq!(guard_decision(true, None, "/users", &[]), GuardOutcome::Loading);
    }

    #[test]
    fn empty_allowed_roles_admits_any_authenticated_user() {
        for role in UserRole::ALL {
            let u = user(role, false);
            assert_eq!(
                guard_decision(false, Some(&u), "/profile", &[]),
                GuardOutcome::Allow
            );
        }
    }
}
