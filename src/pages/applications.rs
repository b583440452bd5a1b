//! HR application list with status filter, search and counters.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::ApplicationStatusBadge;
use crate::datetime;
use crate::filters;
use crate::models::{Application, ApplicationStatus};

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let (applications, set_applications) = signal(Vec::<Application>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (status_filter, set_status_filter) = signal(Option::<ApplicationStatus>::None);
    let (search, set_search) = signal(String::new());

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::applications::get_all(None, None, None).await {
                Ok(list) => set_applications.set(list),
                Err(err) => set_error.set(Some(
                    err.user_message("Impossible de charger les candidatures"),
                )),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let filtered = Memo::new(move |_| {
        filters::filter_applications(&applications.get(), status_filter.get(), &search.get())
    });
    let stats = Memo::new(move |_| filters::application_stats(&applications.get()));

    view! {
        <div class="applications-page">
            <h1>"Candidatures"</h1>

            <div class="stats-row">
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().total}</span>
                    <span class="stat-label">"Total"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().en_attente}</span>
                    <span class="stat-label">"En attente"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().en_cours}</span>
                    <span class="stat-label">"En cours"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().embauche}</span>
                    <span class="stat-label">"Embauchés"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().refuse}</span>
                    <span class="stat-label">"Refusés"</span>
                </div>
            </div>

            <div class="filters-row">
                <select on:change=move |ev| {
                    set_status_filter.set(ApplicationStatus::parse(&event_target_value(&ev)));
                }>
                    <option value="" selected=move || status_filter.get().is_none()>
                        "Tous les statuts"
                    </option>
                    {ApplicationStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str() selected=move || status_filter.get() == Some(s)>
                            {s.label()}
                        </option>
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Rechercher (nom, email, offre...)"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            {move || error.get().map(|msg| view! {
                <div class="alert alert-error">
                    {msg}
                    <button class="btn btn-secondary" on:click=move |_| load()>
                        "Réessayer"
                    </button>
                </div>
            })}

            {move || if loading.get() {
                view! { <p class="loading">"Chargement..."</p> }.into_any()
            } else if filtered.get().is_empty() {
                view! { <p class="empty">"Aucune candidature."</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Candidat"</th>
                                <th>"Offre"</th>
                                <th>"Date"</th>
                                <th>"Statut"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {filtered.get().into_iter().map(|app| {
                                let href = format!("/application/{}", app.id);
                                view! {
                                    <tr>
                                        <td>
                                            <div class="candidate-name">
                                                {format!("{} {}", app.firstname, app.lastname)}
                                            </div>
                                            <div class="candidate-email">{app.email.clone()}</div>
                                        </td>
                                        <td>{app.job_offer.title.clone()}</td>
                                        <td>{datetime::format_date(&app.application_date)}</td>
                                        <td><ApplicationStatusBadge status=app.status/></td>
                                        <td>
                                            <A href=href attr:class="btn btn-small">"Détail"</A>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
