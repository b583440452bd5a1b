//! HR interview list: counters, filters and the status-update modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{InterviewStatusBadge, InterviewTypeBadge};
use crate::datetime;
use crate::filters;
use crate::models::{Interview, InterviewStatus, InterviewType, UpdateInterview};

#[component]
pub fn InterviewsPage() -> impl IntoView {
    let (interviews, set_interviews) = signal(Vec::<Interview>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let (status_filter, set_status_filter) = signal(Option::<InterviewStatus>::None);
    let (type_filter, set_type_filter) = signal(Option::<InterviewType>::None);
    let (search, set_search) = signal(String::new());

    // Status-update modal.
    let (selected, set_selected) = signal(Option::<Interview>::None);
    let (new_status, set_new_status) = signal(Option::<InterviewStatus>::None);
    let (notes, set_notes) = signal(String::new());
    let (modal_error, set_modal_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::interviews::get_all(None).await {
                Ok(list) => set_interviews.set(list),
                Err(err) => set_error.set(Some(
                    err.user_message("Impossible de charger les entretiens"),
                )),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let filtered = Memo::new(move |_| {
        filters::filter_interviews(
            &interviews.get(),
            status_filter.get(),
            type_filter.get(),
            &search.get(),
        )
    });
    let stats = Memo::new(move |_| filters::interview_stats(&interviews.get()));

    let open_modal = move |itv: Interview| {
        set_new_status.set(None);
        set_notes.set(itv.notes.clone().unwrap_or_default());
        set_modal_error.set(None);
        set_selected.set(Some(itv));
    };

    let close_modal = move || {
        set_selected.set(None);
        set_new_status.set(None);
        set_notes.set(String::new());
        set_modal_error.set(None);
    };

    let confirm_update = move |_| {
        let Some(itv) = selected.get_untracked() else {
            return;
        };
        let Some(status) = new_status.get_untracked() else {
            set_modal_error.set(Some("Veuillez choisir un statut".to_string()));
            return;
        };
        set_saving.set(true);
        set_modal_error.set(None);
        spawn_local(async move {
            let trimmed = notes.get_untracked().trim().to_string();
            let payload = UpdateInterview {
                status: Some(status),
                notes: (!trimmed.is_empty()).then_some(trimmed),
                ..Default::default()
            };
            match api::interviews::update(itv.id, &payload).await {
                Ok(_) => {
                    close_modal();
                    load();
                }
                Err(err) => {
                    set_modal_error
                        .set(Some(err.user_message("La mise à jour a échoué")));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="interviews-page">
            <h1>"Entretiens"</h1>

            <div class="stats-row">
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().total}</span>
                    <span class="stat-label">"Total"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().planifie}</span>
                    <span class="stat-label">"Planifiés"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().termine}</span>
                    <span class="stat-label">"Terminés"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().annule}</span>
                    <span class="stat-label">"Annulés"</span>
                </div>
            </div>

            <div class="filters-row">
                <select on:change=move |ev| {
                    set_status_filter.set(InterviewStatus::parse(&event_target_value(&ev)));
                }>
                    <option value="" selected=move || status_filter.get().is_none()>
                        "Tous les statuts"
                    </option>
                    {InterviewStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str() selected=move || status_filter.get() == Some(s)>
                            {s.label()}
                        </option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    set_type_filter.set(InterviewType::parse(&event_target_value(&ev)));
                }>
                    <option value="" selected=move || type_filter.get().is_none()>
                        "Tous les types"
                    </option>
                    <option
                        value="VISIO"
                        selected=move || type_filter.get() == Some(InterviewType::Visio)
                    >
                        "Visioconférence"
                    </option>
                    <option
                        value="PRESENTIEL"
                        selected=move || type_filter.get() == Some(InterviewType::Presentiel)
                    >
                        "Présentiel"
                    </option>
                </select>
                <input
                    type="text"
                    placeholder="Rechercher (candidat, offre...)"
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
                view! { <p class="empty">"Aucun entretien."</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Candidat"</th>
                                <th>"Offre"</th>
                                <th>"Date"</th>
                                <th>"Type"</th>
                                <th>"Statut"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {filtered.get().into_iter().map(|itv| {
                                // An interview past its slot but never held is flagged.
                                let overdue = itv.status == InterviewStatus::Planifie
                                    && datetime::is_past(&itv.interview_date);
                                let row_class = if overdue { "row-overdue" } else { "" };
                                let editable = itv.status == InterviewStatus::Planifie;
                                let for_modal = itv.clone();
                                view! {
                                    <tr class=row_class>
                                        <td>
                                            {format!(
                                                "{} {}",
                                                itv.application.firstname,
                                                itv.application.lastname
                                            )}
                                        </td>
                                        <td>{itv.application.job_offer.title.clone()}</td>
                                        <td>
                                            {datetime::format_datetime(&itv.interview_date)}
                                            {overdue.then(|| view! {
                                                <span class="overdue-flag">" (dépassé)"</span>
                                            })}
                                        </td>
                                        <td><InterviewTypeBadge interview_type=itv.interview_type/></td>
                                        <td><InterviewStatusBadge status=itv.status/></td>
                                        <td>
                                            {editable.then(|| view! {
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| open_modal(for_modal.clone())
                                                >
                                                    "Mettre à jour"
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            {move || selected.get().map(|itv| view! {
                <div class="modal-overlay" on:click=move |_| close_modal()>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        <h2>
                            {format!(
                                "Entretien du {}",
                                datetime::format_datetime(&itv.interview_date)
                            )}
                        </h2>
                        {move || modal_error.get().map(|msg| view! {
                            <div class="alert alert-error">{msg}</div>
                        })}
                        <div class="form-group">
                            <label for="new-status">"Nouveau statut"</label>
                            <select
                                id="new-status"
                                on:change=move |ev| {
                                    set_new_status
                                        .set(InterviewStatus::parse(&event_target_value(&ev)));
                                }
                            >
                                <option value="" selected=move || new_status.get().is_none()>
                                    "Choisir..."
                                </option>
                                {itv.status.transitions().iter().map(|&s| view! {
                                    <option
                                        value=s.as_str()
                                        selected=move || new_status.get() == Some(s)
                                    >
                                        {s.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="interview-notes">"Notes"</label>
                            <textarea
                                id="interview-notes"
                                rows="4"
                                prop:value=notes
                                on:input=move |ev| set_notes.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| close_modal()>
                                "Annuler"
                            </button>
                            <button
                                class="btn btn-primary"
                                disabled=saving
                                on:click=confirm_update
                            >
                                {move || if saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
