//! Candidate view of their own applications, with the softer wording.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::ApplicationStatusBadge;
use crate::datetime;
use crate::models::{Application, ApplicationStatus};

#[component]
pub fn MyApplicationsPage() -> impl IntoView {
    let (applications, set_applications) = signal(Vec::<Application>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::applications::my_applications().await {
                Ok(list) => set_applications.set(list),
                Err(err) => set_error.set(Some(
                    err.user_message("Impossible de charger vos candidatures"),
                )),
            }
            set_loading.set(false);
        });
    });

    let total = Memo::new(move |_| applications.get().len());
    let interview_stage = Memo::new(move |_| {
        applications
            .get()
            .iter()
            .filter(|a| {
                matches!(
                    a.status,
                    ApplicationStatus::AccepteEntretien | ApplicationStatus::EntretienTermine
                )
            })
            .count()
    });
    let hired = Memo::new(move |_| {
        applications
            .get()
            .iter()
            .filter(|a| a.status == ApplicationStatus::Embauche)
            .count()
    });

    view! {
        <div class="my-applications-page">
            <h1>"Mes candidatures"</h1>

            <div class="stats-row">
                <div class="stat-card">
                    <span class="stat-value">{total}</span>
                    <span class="stat-label">"Candidatures"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{interview_stage}</span>
                    <span class="stat-label">"En phase d'entretien"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{hired}</span>
                    <span class="stat-label">"Embauches"</span>
                </div>
            </div>

            {move || error.get().map(|msg| view! {
                <div class="alert alert-error">{msg}</div>
            })}

            {move || if loading.get() {
                view! { <p class="loading">"Chargement..."</p> }.into_any()
            } else if applications.get().is_empty() {
                view! {
                    <div class="empty-state">
                        <p>"Vous n'avez pas encore postulé."</p>
                        <A href="/job-offers" attr:class="btn btn-primary">
                            "Découvrir les offres"
                        </A>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="application-cards">
                        {applications.get().into_iter().map(|app| view! {
                            <div class="application-card">
                                <div class="application-card-header">
                                    <h3>{app.job_offer.title.clone()}</h3>
                                    <ApplicationStatusBadge status=app.status candidate=true/>
                                </div>
                                <p class="application-date">
                                    {format!(
                                        "Envoyée le {}",
                                        datetime::format_date(&app.application_date)
                                    )}
                                </p>
                                <p class="status-message">{app.status.candidate_message()}</p>
                                {(app.status == ApplicationStatus::AccepteEntretien).then(|| view! {
                                    <div class="alert alert-info">
                                        "Retrouvez les détails dans "
                                        <A href="/my-interviews">"Mes entretiens"</A>
                                        "."
                                    </div>
                                })}
                                {(app.status == ApplicationStatus::Embauche).then(|| view! {
                                    <div class="alert alert-success">
                                        "L'équipe RH vous contactera pour la suite."
                                    </div>
                                })}
                                {app.comment.as_ref().map(|c| view! {
                                    <div class="hr-comment">
                                        <span class="hr-comment-label">"Message du recruteur : "</span>
                                        {c.clone()}
                                    </div>
                                })}
                            </div>
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
