//! Login form.
//!
//! A user already authenticated is sent away, honoring the forced password
//! change before anything else.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::auth::{self, use_auth, AuthSessionStoreFields};
use crate::models::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_auth();
    let navigate = leptos_router::hooks::use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    // Already logged in: skip the form.
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if store.loading().get() {
                return;
            }
            if let Some(user) = store.user().get() {
                let target = if user.must_change_password {
                    "/change-password"
                } else {
                    "/home"
                };
                navigate(target, Default::default());
            }
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            set_error.set(Some("Veuillez renseigner vos identifiants".to_string()));
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth::login(store, credentials).await {
                Ok(user) => {
                    let target = if user.must_change_password {
                        "/change-password"
                    } else {
                        "/home"
                    };
                    navigate(target, Default::default());
                }
                Err(err) => {
                    set_error.set(Some(err.user_message("Email ou mot de passe incorrect")));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Connexion"</h1>
                {move || error.get().map(|msg| view! {
                    <div class="alert alert-error">{msg}</div>
                })}
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Mot de passe"</label>
                        <input
                            id="password"
                            type="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || if submitting.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
