//! HR application detail: candidate record, interview history and the
//! processing actions.
//!
//! Convoking a candidate combines two calls: the application is first moved to
//! ACCEPTE_ENTRETIEN, then the interview is created. Scheduling is blocked
//! while an interview is still PLANIFIE.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::{ApplicationStatusBadge, InterviewStatusBadge, InterviewTypeBadge};
use crate::datetime;
use crate::filters;
use crate::lifecycle;
use crate::models::{
    Address, Application, ApplicationStatus, CreateInterview, Interview, InterviewType,
    ProcessApplication,
};

#[component]
pub fn ApplicationDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let application_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|id| id.parse::<u32>().ok())
    });

    let (application, set_application) = signal(Option::<Application>::None);
    let (interviews, set_interviews) = signal(Vec::<Interview>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // Process modal state.
    let (process_target, set_process_target) = signal(Option::<ApplicationStatus>::None);
    let (comment, set_comment) = signal(String::new());
    let (process_error, set_process_error) = signal(Option::<String>::None);
    let (is_processing, set_is_processing) = signal(false);

    // Interview modal state.
    let (interview_modal, set_interview_modal) = signal(false);
    let (interview_date, set_interview_date) = signal(String::new());
    let (interview_type, set_interview_type) = signal(InterviewType::Visio);
    let (visio_link, set_visio_link) = signal(String::new());
    let (itv_city, set_itv_city) = signal(String::new());
    let (itv_country, set_itv_country) = signal(String::new());
    let (itv_notes, set_itv_notes) = signal(String::new());
    let (interview_error, set_interview_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let Some(id) = application_id.get() else {
            set_loading.set(false);
            set_error.set(Some("Candidature introuvable".to_string()));
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::applications::get_by_id(id).await {
                Ok(found) => set_application.set(Some(found)),
                Err(err) => {
                    set_error.set(Some(err.user_message("Candidature introuvable")));
                }
            }
            // Interview history is joined client-side from the full list.
            if let Ok(list) = api::interviews::get_all(None).await {
                set_interviews.set(list);
            }
            set_loading.set(false);
        });
    });

    let linked_interviews = Memo::new(move |_| {
        application_id
            .get()
            .map(|id| filters::interviews_for_application(&interviews.get(), id))
            .unwrap_or_default()
    });
    let pending_count = Memo::new(move |_| {
        application_id
            .get()
            .map(|id| filters::pending_interview_count(&interviews.get(), id))
            .unwrap_or(0)
    });
    let completed_count = Memo::new(move |_| {
        application_id
            .get()
            .map(|id| filters::completed_interview_count(&interviews.get(), id))
            .unwrap_or(0)
    });

    let close_process_modal = move || {
        set_process_target.set(None);
        set_comment.set(String::new());
        set_process_error.set(None);
    };

    let confirm_process = move |_| {
        let Some(target) = process_target.get_untracked() else {
            return;
        };
        let Some(id) = application_id.get_untracked() else {
            return;
        };
        let trimmed = comment.get_untracked().trim().to_string();
        if target.requires_comment() && trimmed.is_empty() {
            set_process_error.set(Some(
                "Un commentaire est obligatoire pour un refus".to_string(),
            ));
            return;
        }
        set_is_processing.set(true);
        set_process_error.set(None);
        spawn_local(async move {
            let payload = ProcessApplication {
                status: target,
                comment: (!trimmed.is_empty()).then_some(trimmed),
            };
            match api::applications::process(id, &payload).await {
                Ok(updated) => {
                    set_application.set(Some(updated));
                    close_process_modal();
                }
                Err(err) => {
                    set_process_error
                        .set(Some(err.user_message("Le traitement a échoué")));
                }
            }
            set_is_processing.set(false);
        });
    };

    let close_interview_modal = move || {
        set_interview_modal.set(false);
        set_interview_date.set(String::new());
        set_interview_type.set(InterviewType::Visio);
        set_visio_link.set(String::new());
        set_itv_city.set(String::new());
        set_itv_country.set(String::new());
        set_itv_notes.set(String::new());
        set_interview_error.set(None);
    };

    let confirm_interview = {
        let navigate = navigate.clone();
        move |_| {
            let Some(app) = application.get_untracked() else {
                return;
            };
            let date = interview_date.get_untracked();
            if date.is_empty() {
                set_interview_error.set(Some("La date de l'entretien est requise".to_string()));
                return;
            }
            let itv_type = interview_type.get_untracked();
            let link = visio_link.get_untracked().trim().to_string();
            if itv_type == InterviewType::Visio && link.is_empty() {
                set_interview_error
                    .set(Some("Le lien de visioconférence est requis".to_string()));
                return;
            }
            set_is_processing.set(true);
            set_interview_error.set(None);
            let navigate = navigate.clone();
            spawn_local(async move {
                // A candidate still EN_COURS is convoked first.
                if app.status == ApplicationStatus::EnCours {
                    let convocation = ProcessApplication {
                        status: ApplicationStatus::AccepteEntretien,
                        comment: Some(format!(
                            "Candidat convoqué en entretien - {}",
                            itv_type.label()
                        )),
                    };
                    if let Err(err) = api::applications::process(app.id, &convocation).await {
                        set_interview_error
                            .set(Some(err.user_message("La convocation a échoué")));
                        set_is_processing.set(false);
                        return;
                    }
                }
                let city = itv_city.get_untracked().trim().to_string();
                let notes = itv_notes.get_untracked().trim().to_string();
                let payload = CreateInterview {
                    application_id: app.id,
                    interview_date: date,
                    interview_type: itv_type,
                    visio_link: (itv_type == InterviewType::Visio).then_some(link),
                    address: (itv_type == InterviewType::Presentiel && !city.is_empty()).then(
                        || Address {
                            city,
                            country: itv_country.get_untracked().trim().to_string(),
                            ..Default::default()
                        },
                    ),
                    notes: (!notes.is_empty()).then_some(notes),
                };
                match api::interviews::create(&payload).await {
                    Ok(_) => navigate("/interviews", Default::default()),
                    Err(err) => {
                        set_interview_error.set(Some(
                            err.user_message("La planification de l'entretien a échoué"),
                        ));
                    }
                }
                set_is_processing.set(false);
            });
        }
    };

    // Action buttons for the current status. Convoking opens the interview
    // modal, completing the interview stage needs a held interview, the rest
    // go through the process modal.
    let actions = move |app: &Application| {
        let status = app.status;
        status
            .transitions()
            .iter()
            .map(|&target| {
                match target {
                    ApplicationStatus::AccepteEntretien => {
                        view! {
                            <button
                                class="btn btn-primary"
                                disabled=is_processing
                                on:click=move |_| set_interview_modal.set(true)
                            >
                                {target.action_label()}
                            </button>
                        }
                        .into_any()
                    }
                    ApplicationStatus::EntretienTermine => {
                        let blocked = !lifecycle::can_complete_interview_stage(
                            status,
                            completed_count.get(),
                        );
                        view! {
                            <button
                                class="btn btn-primary"
                                disabled=move || is_processing.get() || blocked
                                title=blocked
                                    .then_some("Au moins un entretien doit être terminé")
                                on:click=move |_| set_process_target.set(Some(target))
                            >
                                {target.action_label()}
                            </button>
                        }
                        .into_any()
                    }
                    _ => view! {
                        <button
                            class="btn btn-secondary"
                            disabled=is_processing
                            on:click=move |_| set_process_target.set(Some(target))
                        >
                            {target.action_label()}
                        </button>
                    }
                    .into_any(),
                }
            })
            .collect_view()
    };

    view! {
        <div class="application-detail-page">
            {move || if loading.get() {
                view! { <p class="loading">"Chargement..."</p> }.into_any()
            } else if let Some(app) = application.get() {
                view! {
                    <div class="detail-header">
                        <h1>{format!("{} {}", app.firstname, app.lastname)}</h1>
                        <ApplicationStatusBadge status=app.status/>
                    </div>

                    <section class="candidate-card">
                        <h2>"Candidat"</h2>
                        <p>{format!("Email : {}", app.email)}</p>
                        <p>{format!("Téléphone : {}", app.phone)}</p>
                        {app.birthdate.as_ref().map(|b| view! {
                            <p>{format!("Né(e) le {}", datetime::format_date(b))}</p>
                        })}
                        {app.address.as_ref().map(|a| view! {
                            <p>{format!("Adresse : {}, {}", a.city, a.country)}</p>
                        })}
                        <p>
                            {format!(
                                "Candidature du {} pour « {} »",
                                datetime::format_date(&app.application_date),
                                app.job_offer.title
                            )}
                        </p>
                    </section>

                    <section class="cover-letter-card">
                        <h2>"Lettre de motivation"</h2>
                        <p>{app.cover_letter.clone()}</p>
                    </section>

                    {app.comment.as_ref().map(|c| view! {
                        <section class="comment-card">
                            <h2>"Commentaire RH"</h2>
                            <p>{c.clone()}</p>
                        </section>
                    })}

                    <section class="interviews-card">
                        <h2>"Entretiens"</h2>
                        {move || (pending_count.get() > 0).then(|| view! {
                            <div class="alert alert-warning">
                                "Un entretien est déjà planifié pour cette candidature."
                            </div>
                        })}
                        {move || {
                            let linked = linked_interviews.get();
                            if linked.is_empty() {
                                view! { <p class="empty">"Aucun entretien."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="interview-list">
                                        {linked.into_iter().map(|itv| view! {
                                            <li class="interview-item">
                                                <span>
                                                    {datetime::format_datetime(&itv.interview_date)}
                                                </span>
                                                <InterviewTypeBadge interview_type=itv.interview_type/>
                                                <InterviewStatusBadge status=itv.status/>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                }
                                .into_any()
                            }
                        }}
                        {move || {
                            let app_status = application.get().map(|a| a.status);
                            (app_status == Some(ApplicationStatus::AccepteEntretien)).then(|| {
                                let schedulable = lifecycle::can_schedule_interview(
                                    ApplicationStatus::AccepteEntretien,
                                    pending_count.get(),
                                );
                                view! {
                                    <button
                                        class="btn btn-primary"
                                        disabled=!schedulable
                                        on:click=move |_| set_interview_modal.set(true)
                                    >
                                        "Planifier un entretien"
                                    </button>
                                }
                            })
                        }}
                    </section>

                    {app.status.can_process().then(|| view! {
                        <section class="actions-card">
                            <h2>"Actions"</h2>
                            <div class="actions-row">{actions(&app)}</div>
                        </section>
                    })}
                }
                .into_any()
            } else {
                view! {
                    <div class="alert alert-error">
                        {error.get().unwrap_or_else(|| "Candidature introuvable".to_string())}
                    </div>
                }
                .into_any()
            }}

            // Process confirmation modal.
            {move || process_target.get().map(|target| view! {
                <div class="modal-overlay" on:click=move |_| close_process_modal()>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        <h2>{target.action_label()}</h2>
                        {move || process_error.get().map(|msg| view! {
                            <div class="alert alert-error">{msg}</div>
                        })}
                        <div class="form-group">
                            <label for="process-comment">
                                {if target.requires_comment() {
                                    "Commentaire (obligatoire)"
                                } else {
                                    "Commentaire (facultatif)"
                                }}
                            </label>
                            <textarea
                                id="process-comment"
                                rows="4"
                                prop:value=comment
                                on:input=move |ev| set_comment.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="modal-actions">
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| close_process_modal()
                            >
                                "Annuler"
                            </button>
                            <button
                                class="btn btn-primary"
                                disabled=is_processing
                                on:click=confirm_process
                            >
                                {move || if is_processing.get() { "Traitement..." } else { "Confirmer" }}
                            </button>
                        </div>
                    </div>
                </div>
            })}

            // Interview scheduling modal.
            {move || interview_modal.get().then(|| view! {
                <div class="modal-overlay" on:click=move |_| close_interview_modal()>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        <h2>"Planifier un entretien"</h2>
                        {move || interview_error.get().map(|msg| view! {
                            <div class="alert alert-error">{msg}</div>
                        })}
                        <div class="form-group">
                            <label for="interview-date">"Date et heure *"</label>
                            <input
                                id="interview-date"
                                type="datetime-local"
                                prop:value=interview_date
                                on:input=move |ev| set_interview_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="interview-type">"Type d'entretien"</label>
                            <select
                                id="interview-type"
                                on:change=move |ev| {
                                    if let Some(t) = InterviewType::parse(&event_target_value(&ev)) {
                                        set_interview_type.set(t);
                                    }
                                }
                            >
                                <option
                                    value="VISIO"
                                    selected=move || interview_type.get() == InterviewType::Visio
                                >
                                    "Visioconférence"
                                </option>
                                <option
                                    value="PRESENTIEL"
                                    selected=move || interview_type.get() == InterviewType::Presentiel
                                >
                                    "Présentiel"
                                </option>
                            </select>
                        </div>
                        {move || (interview_type.get() == InterviewType::Visio).then(|| view! {
                            <div class="form-group">
                                <label for="visio-link">"Lien de visioconférence *"</label>
                                <input
                                    id="visio-link"
                                    type="url"
                                    prop:value=visio_link
                                    on:input=move |ev| set_visio_link.set(event_target_value(&ev))
                                />
                            </div>
                        })}
                        {move || (interview_type.get() == InterviewType::Presentiel).then(|| view! {
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="itv-city">"Ville"</label>
                                    <input
                                        id="itv-city"
                                        type="text"
                                        prop:value=itv_city
                                        on:input=move |ev| set_itv_city.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="itv-country">"Pays"</label>
                                    <input
                                        id="itv-country"
                                        type="text"
                                        prop:value=itv_country
                                        on:input=move |ev| set_itv_country.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>
                        })}
                        <div class="form-group">
                            <label for="itv-notes">"Notes"</label>
                            <textarea
                                id="itv-notes"
                                rows="3"
                                prop:value=itv_notes
                                on:input=move |ev| set_itv_notes.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="modal-actions">
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| close_interview_modal()
                            >
                                "Annuler"
                            </button>
                            <button
                                class="btn btn-primary"
                                disabled=is_processing
                                on:click=confirm_interview.clone()
                            >
                                {move || if is_processing.get() { "Planification..." } else { "Planifier" }}
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
