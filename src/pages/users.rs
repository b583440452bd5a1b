//! Admin user management: list, create/edit, activation toggle, deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api;
use crate::models::{CreateUser, UpdateUser, User, UserRole};

/// Which user the modal edits, if any.
#[derive(Clone, PartialEq)]
enum ModalState {
    Closed,
    Create,
    Edit(User),
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (role_filter, set_role_filter) = signal(Option::<UserRole>::None);

    let (modal, set_modal) = signal(ModalState::Closed);
    let (firstname, set_firstname) = signal(String::new());
    let (lastname, set_lastname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (role, set_role) = signal(UserRole::Candidat);
    let (password, set_password) = signal(String::new());
    let (modal_error, set_modal_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::users::get_all(role_filter.get_untracked()).await {
                Ok(list) => set_users.set(list),
                Err(err) => set_error.set(Some(
                    err.user_message("Impossible de charger les utilisateurs"),
                )),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        // Refetch whenever the role filter changes.
        role_filter.track();
        load();
    });

    let open_create = move |_| {
        set_firstname.set(String::new());
        set_lastname.set(String::new());
        set_email.set(String::new());
        set_phone.set(String::new());
        set_role.set(UserRole::Candidat);
        set_password.set(String::new());
        set_modal_error.set(None);
        set_modal.set(ModalState::Create);
    };

    let open_edit = move |user: User| {
        set_firstname.set(user.firstname.clone());
        set_lastname.set(user.lastname.clone());
        set_email.set(user.email.clone());
        set_phone.set(user.phone.clone().unwrap_or_default());
        set_role.set(user.role);
        set_password.set(String::new());
        set_modal_error.set(None);
        set_modal.set(ModalState::Edit(user));
    };

    let close_modal = move || set_modal.set(ModalState::Closed);

    let on_save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let state = modal.get_untracked();
        let first = firstname.get_untracked().trim().to_string();
        let last = lastname.get_untracked().trim().to_string();
        let mail = email.get_untracked().trim().to_string();
        let tel = phone.get_untracked().trim().to_string();
        if first.is_empty() || last.is_empty() || mail.is_empty() {
            set_modal_error.set(Some(
                "Nom, prénom et email sont obligatoires".to_string(),
            ));
            return;
        }
        let pass = password.get_untracked();
        if matches!(state, ModalState::Create) && pass.is_empty() {
            set_modal_error.set(Some("Le mot de passe initial est requis".to_string()));
            return;
        }
        set_saving.set(true);
        set_modal_error.set(None);
        spawn_local(async move {
            let result = match state {
                ModalState::Create => api::users::create(&CreateUser {
                    firstname: first,
                    lastname: last,
                    email: mail,
                    phone: tel,
                    birthdate: None,
                    role: role.get_untracked(),
                    password: pass,
                    address: None,
                    is_active: Some(true),
                })
                .await
                .map(|_| ()),
                ModalState::Edit(user) => api::users::update(
                    user.id,
                    &UpdateUser {
                        firstname: Some(first),
                        lastname: Some(last),
                        email: Some(mail),
                        phone: (!tel.is_empty()).then_some(tel),
                        role: Some(role.get_untracked()),
                        password: (!pass.is_empty()).then_some(pass),
                        ..Default::default()
                    },
                )
                .await
                .map(|_| ()),
                ModalState::Closed => Ok(()),
            };
            match result {
                Ok(()) => {
                    close_modal();
                    load();
                }
                Err(err) => {
                    set_modal_error
                        .set(Some(err.user_message("L'enregistrement a échoué")));
                }
            }
            set_saving.set(false);
        });
    };

    let toggle_active = move |user: &User| {
        let id = user.id;
        let target = !user.is_active;
        spawn_local(async move {
            match api::users::set_active(id, target).await {
                Ok(_) => load(),
                Err(err) => set_error.set(Some(
                    err.user_message("Impossible de changer le statut du compte"),
                )),
            }
        });
    };

    let delete_user = move |id: u32| {
        spawn_local(async move {
            match api::users::delete(id).await {
                Ok(()) => load(),
                Err(err) => set_error.set(Some(
                    err.user_message("La suppression a échoué"),
                )),
            }
        });
    };

    view! {
        <div class="users-page">
            <div class="page-header">
                <h1>"Utilisateurs"</h1>
                <button class="btn btn-primary" on:click=open_create>
                    "Nouvel utilisateur"
                </button>
            </div>

            <div class="filters-row">
                <select on:change=move |ev| {
                    set_role_filter.set(UserRole::parse(&event_target_value(&ev)));
                }>
                    <option value="" selected=move || role_filter.get().is_none()>
                        "Tous les rôles"
                    </option>
                    {UserRole::ALL.into_iter().map(|r| view! {
                        <option value=r.as_str() selected=move || role_filter.get() == Some(r)>
                            {r.as_str()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            {move || error.get().map(|msg| view! {
                <div class="alert alert-error">{msg}</div>
            })}

            {move || if loading.get() {
                view! { <p class="loading">"Chargement..."</p> }.into_any()
            } else if users.get().is_empty() {
                view! { <p class="empty">"Aucun utilisateur."</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Nom"</th>
                                <th>"Email"</th>
                                <th>"Rôle"</th>
                                <th>"Compte"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {users.get().into_iter().map(|user| {
                                let for_edit = user.clone();
                                let for_toggle = user.clone();
                                let id = user.id;
                                view! {
                                    <tr>
                                        <td>{format!("{} {}", user.firstname, user.lastname)}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.role.as_str()}</td>
                                        <td>
                                            <span class=if user.is_active {
                                                "account-active"
                                            } else {
                                                "account-inactive"
                                            }>
                                                {if user.is_active { "Actif" } else { "Désactivé" }}
                                            </span>
                                        </td>
                                        <td class="row-actions">
                                            <button
                                                class="btn btn-small"
                                                on:click=move |_| open_edit(for_edit.clone())
                                            >
                                                "Modifier"
                                            </button>
                                            <button
                                                class="btn btn-small"
                                                on:click=move |_| toggle_active(&for_toggle)
                                            >
                                                {if user.is_active { "Désactiver" } else { "Activer" }}
                                            </button>
                                            <button
                                                class="btn btn-small btn-danger"
                                                on:click=move |_| delete_user(id)
                                            >
                                                "Supprimer"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            {move || (modal.get() != ModalState::Closed).then(|| {
                let editing = matches!(modal.get_untracked(), ModalState::Edit(_));
                view! {
                    <div class="modal-overlay" on:click=move |_| close_modal()>
                        <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                            <h2>
                                {if editing { "Modifier l'utilisateur" } else { "Nouvel utilisateur" }}
                            </h2>
                            {move || modal_error.get().map(|msg| view! {
                                <div class="alert alert-error">{msg}</div>
                            })}
                            <form on:submit=on_save>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="user-firstname">"Prénom *"</label>
                                        <input
                                            id="user-firstname"
                                            type="text"
                                            prop:value=firstname
                                            on:input=move |ev| set_firstname.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="user-lastname">"Nom *"</label>
                                        <input
                                            id="user-lastname"
                                            type="text"
                                            prop:value=lastname
                                            on:input=move |ev| set_lastname.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                                <div class="form-group">
                                    <label for="user-email">"Email *"</label>
                                    <input
                                        id="user-email"
                                        type="email"
                                        prop:value=email
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="user-phone">"Téléphone"</label>
                                    <input
                                        id="user-phone"
                                        type="tel"
                                        prop:value=phone
                                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="user-role">"Rôle"</label>
                                    <select
                                        id="user-role"
                                        on:change=move |ev| {
                                            if let Some(r) = UserRole::parse(&event_target_value(&ev)) {
                                                set_role.set(r);
                                            }
                                        }
                                    >
                                        {UserRole::ALL.into_iter().map(|r| view! {
                                            <option value=r.as_str() selected=move || role.get() == r>
                                                {r.as_str()}
                                            </option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div class="form-group">
                                    <label for="user-password">
                                        {if editing {
                                            "Nouveau mot de passe (laisser vide pour conserver)"
                                        } else {
                                            "Mot de passe initial *"
                                        }}
                                    </label>
                                    <input
                                        id="user-password"
                                        type="password"
                                        prop:value=password
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="modal-actions">
                                    <button
                                        type="button"
                                        class="btn btn-secondary"
                                        on:click=move |_| close_modal()
                                    >
                                        "Annuler"
                                    </button>
                                    <button type="submit" class="btn btn-primary" disabled=saving>
                                        {move || if saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
