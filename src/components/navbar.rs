//! Top navigation bar with role-dependent links.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::{self, use_auth, AuthSessionStoreFields};
use crate::models::UserRole;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let role = move || auth.user().get().map(|u| u.role);
    let display_name = move || {
        auth.user()
            .get()
            .map(|u| format!("{} {}", u.firstname, u.lastname))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth::logout(auth);
        navigate("/login", Default::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <div class="navbar-left">
                    <A href="/home" attr:class="navbar-brand">"RecrutPlus"</A>

                    {move || match role() {
                        Some(UserRole::Rh) | Some(UserRole::Admin) => view! {
                            <div class="navbar-menu">
                                <A href="/job-offers" attr:class="navbar-link">"Offres d'emploi"</A>
                                <A href="/applications" attr:class="navbar-link">"Candidatures"</A>
                                <A href="/interviews" attr:class="navbar-link">"Entretiens"</A>
                                {(role() == Some(UserRole::Admin)).then(|| view! {
                                    <A href="/users" attr:class="navbar-link">"Utilisateurs"</A>
                                })}
                            </div>
                        }
                        .into_any(),
                        Some(UserRole::Candidat) => view! {
                            <div class="navbar-menu">
                                <A href="/job-offers" attr:class="navbar-link">"Rechercher"</A>
                                <A href="/my-applications" attr:class="navbar-link">"Mes candidatures"</A>
                                <A href="/my-interviews" attr:class="navbar-link">"Mes entretiens"</A>
                            </div>
                        }
                        .into_any(),
                        None => ().into_any(),
                    }}
                </div>

                <div class="navbar-right">
                    {move || if auth.user().get().is_some() {
                        view! {
                            <A href="/profile" attr:class="navbar-profile">{display_name()}</A>
                            <button class="navbar-logout-btn" on:click=on_logout.clone()>
                                "Déconnexion"
                            </button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <A href="/login" attr:class="navbar-login">"Connexion"</A>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </nav>
    }
}
