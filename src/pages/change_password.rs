//! Password change, regular or forced.
//!
//! The forced flow (first connection) asks for no old password and only
//! unlocks the rest of the app once the server has confirmed the change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use crate::api;
use crate::auth::{self, use_auth, AuthSessionStoreFields};
use crate::models::ChangePasswordRequest;
use crate::validation;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let store = use_auth();
    let navigate = use_navigate();

    let first_time = move || {
        store
            .user()
            .get()
            .map(|u| u.must_change_password)
            .unwrap_or(false)
    };

    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<String>::new());
    let (server_error, set_server_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);
    let (success, set_success) = signal(false);

    let strength = Memo::new(move |_| validation::password_strength(&new_password.get()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let forced = first_time();
        let found = validation::validate_change_password(
            forced,
            &old_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(Vec::new());
        set_server_error.set(None);
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let request = ChangePasswordRequest {
                old_password: (!forced).then(|| old_password.get_untracked()),
                new_password: new_password.get_untracked(),
            };
            match api::auth::change_password(&request).await {
                Ok(()) => {
                    // The server cleared the flag; mirror it locally so the
                    // guard stops redirecting here.
                    if let Some(mut user) = store.user().get_untracked() {
                        user.must_change_password = false;
                        auth::update_user(store, user);
                    }
                    set_success.set(true);
                    gloo_timers::future::TimeoutFuture::new(2_000).await;
                    let target = if forced { "/home" } else { "/profile" };
                    navigate(target, Default::default());
                }
                Err(err) => {
                    set_server_error.set(Some(
                        err.user_message("Le changement de mot de passe a échoué"),
                    ));
                }
            }
            set_submitting.set(false);
        });
    };

    let check = |label: &'static str, ok: bool| {
        view! {
            <li class=if ok { "check-ok" } else { "check-missing" }>
                {if ok { "✓ " } else { "○ " }}
                {label}
            </li>
        }
    };

    view! {
        <div class="change-password-page">
            <div class="change-password-card">
                <h1>"Changer mon mot de passe"</h1>

                {move || first_time().then(|| view! {
                    <div class="alert alert-warning">
                        "Première connexion : vous devez définir un nouveau mot de passe \
                         avant de continuer."
                    </div>
                })}

                {move || success.get().then(|| view! {
                    <div class="alert alert-success">
                        "Mot de passe modifié avec succès. Redirection..."
                    </div>
                })}

                {move || server_error.get().map(|msg| view! {
                    <div class="alert alert-error">{msg}</div>
                })}

                {move || {
                    let list = errors.get();
                    (!list.is_empty()).then(|| view! {
                        <ul class="form-errors">
                            {list.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                        </ul>
                    })
                }}

                <form on:submit=on_submit>
                    {move || (!first_time()).then(|| view! {
                        <div class="form-group">
                            <label for="old-password">"Ancien mot de passe"</label>
                            <input
                                id="old-password"
                                type="password"
                                prop:value=old_password
                                on:input=move |ev| set_old_password.set(event_target_value(&ev))
                            />
                        </div>
                    })}
                    <div class="form-group">
                        <label for="new-password">"Nouveau mot de passe"</label>
                        <input
                            id="new-password"
                            type="password"
                            prop:value=new_password
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">"Confirmation"</label>
                        <input
                            id="confirm-password"
                            type="password"
                            prop:value=confirm_password
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        />
                    </div>

                    <ul class="strength-checklist">
                        {move || {
                            let s = strength.get();
                            vec![
                                check("Au moins 12 caractères", s.length),
                                check("Une minuscule", s.lowercase),
                                check("Une majuscule", s.uppercase),
                                check("Un chiffre", s.digit),
                                check("Un caractère spécial", s.special),
                            ]
                        }}
                    </ul>

                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || if submitting.get() { "Enregistrement..." } else { "Valider" }}
                    </button>
                </form>

                {move || first_time().then(|| {
                    let navigate = leptos_router::hooks::use_navigate();
                    view! {
                        <button
                            class="btn-link"
                            on:click=move |_| {
                                auth::logout(store);
                                navigate("/login", Default::default());
                            }
                        >
                            "Se déconnecter"
                        </button>
                    }
                })}

                {move || (!first_time()).then(|| view! {
                    <A href="/profile" attr:class="btn-link">"Retour au profil"</A>
                })}
            </div>
        </div>
    }
}
