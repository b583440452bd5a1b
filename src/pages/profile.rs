//! Profile page showing the cached session user.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::{self, use_auth, AuthSessionStoreFields};
use crate::datetime;
use crate::models::UserRole;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth::logout(store);
        navigate("/login", Default::default());
    };

    view! {
        <div class="profile-page">
            {move || store.user().get().map(|user| {
                let role_label = match user.role {
                    UserRole::Admin => "Administrateur",
                    UserRole::Rh => "Recruteur",
                    UserRole::Candidat => "Candidat",
                };
                view! {
                    <div class="profile-card">
                        <h1>{format!("{} {}", user.firstname, user.lastname)}</h1>
                        <span class="role-badge">{role_label}</span>

                        {user.must_change_password.then(|| view! {
                            <div class="alert alert-warning">
                                "Vous devez changer votre mot de passe. "
                                <A href="/change-password">"Changer maintenant"</A>
                            </div>
                        })}

                        <div class="profile-details">
                            <p>{format!("Email : {}", user.email)}</p>
                            {user.phone.as_ref().map(|p| view! {
                                <p>{format!("Téléphone : {p}")}</p>
                            })}
                            {user.birthdate.as_ref().map(|b| view! {
                                <p>{format!("Né(e) le {}", datetime::format_date(b))}</p>
                            })}
                            {user.address.as_ref().map(|a| view! {
                                <p>{format!("Adresse : {}, {}", a.city, a.country)}</p>
                            })}
                        </div>

                        {(user.role == UserRole::Candidat).then(|| view! {
                            <div class="quick-links">
                                <A href="/my-applications" attr:class="btn btn-secondary">
                                    "Mes candidatures"
                                </A>
                                <A href="/my-interviews" attr:class="btn btn-secondary">
                                    "Mes entretiens"
                                </A>
                            </div>
                        })}

                        <div class="profile-actions">
                            <A href="/change-password" attr:class="btn btn-secondary">
                                "Changer mon mot de passe"
                            </A>
                            <button class="btn btn-danger" on:click=on_logout.clone()>
                                "Déconnexion"
                            </button>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
