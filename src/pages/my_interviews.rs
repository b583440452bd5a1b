//! Candidate view of their interviews, split between upcoming and past.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{InterviewStatusBadge, InterviewTypeBadge};
use crate::datetime;
use crate::filters;
use crate::models::{Interview, InterviewType};

fn interview_card(itv: &Interview) -> impl IntoView + use<> {
    let today = datetime::is_today(&itv.interview_date);
    view! {
        <div class="interview-card">
            <div class="interview-card-header">
                <h3>{itv.application.job_offer.title.clone()}</h3>
                <InterviewTypeBadge interview_type=itv.interview_type/>
                <InterviewStatusBadge status=itv.status/>
            </div>
            {today.then(|| view! {
                <div class="alert alert-info">"Cet entretien a lieu aujourd'hui !"</div>
            })}
            <p class="interview-date">
                {format!("Le {}", datetime::format_datetime(&itv.interview_date))}
            </p>
            {match itv.interview_type {
                InterviewType::Visio => itv.visio_link.as_ref().map(|link| view! {
                    <p class="interview-location">
                        "Lien : "
                        <a href=link.clone() target="_blank" rel="noopener">{link.clone()}</a>
                    </p>
                }
                .into_any()),
                InterviewType::Presentiel => itv.address.as_ref().map(|a| view! {
                    <p class="interview-location">
                        {format!("Lieu : {}, {}", a.city, a.country)}
                    </p>
                }
                .into_any()),
            }}
            {itv.notes.as_ref().map(|n| view! {
                <p class="interview-notes">{n.clone()}</p>
            })}
        </div>
    }
}

#[component]
pub fn MyInterviewsPage() -> impl IntoView {
    let (interviews, set_interviews) = signal(Vec::<Interview>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::interviews::my_interviews().await {
                Ok(list) => set_interviews.set(list),
                Err(err) => set_error.set(Some(
                    err.user_message("Impossible de charger vos entretiens"),
                )),
            }
            set_loading.set(false);
        });
    });

    let upcoming =
        Memo::new(move |_| filters::upcoming_interviews(&interviews.get(), datetime::now()));
    let past = Memo::new(move |_| filters::past_interviews(&interviews.get(), datetime::now()));

    view! {
        <div class="my-interviews-page">
            <h1>"Mes entretiens"</h1>

            {move || error.get().map(|msg| view! {
                <div class="alert alert-error">{msg}</div>
            })}

            {move || if loading.get() {
                view! { <p class="loading">"Chargement..."</p> }.into_any()
            } else if interviews.get().is_empty() {
                view! { <p class="empty">"Aucun entretien planifié pour le moment."</p> }
                    .into_any()
            } else {
                view! {
                    <section class="upcoming-interviews">
                        <h2>"À venir"</h2>
                        {move || {
                            let list = upcoming.get();
                            if list.is_empty() {
                                view! { <p class="empty">"Aucun entretien à venir."</p> }
                                    .into_any()
                            } else {
                                list.iter().map(interview_card).collect_view().into_any()
                            }
                        }}
                    </section>
                    <section class="past-interviews">
                        <h2>"Passés"</h2>
                        {move || {
                            let list = past.get();
                            if list.is_empty() {
                                view! { <p class="empty">"Aucun entretien passé."</p> }
                                    .into_any()
                            } else {
                                list.iter().map(interview_card).collect_view().into_any()
                            }
                        }}
                    </section>
                }
                .into_any()
            }}
        </div>
    }
}
