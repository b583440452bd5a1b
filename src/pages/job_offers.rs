//! Public job offer search.
//!
//! Loads the active offers plus the filter vocabularies on mount; the search
//! button queries the API with whichever criteria are set.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api;
use crate::components::JobOfferCard;
use crate::models::{ContractType, JobOffer, Specialty};

#[component]
pub fn JobOffersPage() -> impl IntoView {
    let (offers, set_offers) = signal(Vec::<JobOffer>::new());
    let (specialties, set_specialties) = signal(Vec::<Specialty>::new());
    let (contract_types, set_contract_types) = signal(Vec::<ContractType>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let (keyword, set_keyword) = signal(String::new());
    let (specialty, set_specialty) = signal(Option::<Specialty>::None);
    let (contract_type, set_contract_type) = signal(Option::<ContractType>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::job_offers::get_active().await {
                Ok(list) => set_offers.set(list),
                Err(err) => set_error.set(Some(
                    err.user_message("Impossible de charger les offres"),
                )),
            }
            if let Ok(list) = api::job_offers::specialties().await {
                set_specialties.set(list);
            }
            if let Ok(list) = api::job_offers::contract_types().await {
                set_contract_types.set(list);
            }
            set_loading.set(false);
        });
    });

    let run_search = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let kw = keyword.get_untracked();
            let kw = kw.trim();
            let result = api::job_offers::search(
                (!kw.is_empty()).then_some(kw),
                specialty.get_untracked(),
                contract_type.get_untracked(),
            )
            .await;
            match result {
                Ok(list) => set_offers.set(list),
                Err(err) => set_error.set(Some(err.user_message("La recherche a échoué"))),
            }
            set_loading.set(false);
        });
    };

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        run_search();
    };

    let on_reset = move |_| {
        set_keyword.set(String::new());
        set_specialty.set(None);
        set_contract_type.set(None);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::job_offers::get_active().await {
                Ok(list) => set_offers.set(list),
                Err(err) => set_error.set(Some(
                    err.user_message("Impossible de charger les offres"),
                )),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="job-offers-page">
            <h1>"Offres d'emploi"</h1>

            <form class="search-bar" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Mot-clé (titre, description...)"
                    prop:value=keyword
                    on:input=move |ev| set_keyword.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    set_specialty.set(Specialty::parse(&event_target_value(&ev)));
                }>
                    <option value="" selected=move || specialty.get().is_none()>
                        "Toutes les spécialités"
                    </option>
                    {move || specialties.get().into_iter().map(|s| view! {
                        <option value=s.as_str() selected=move || specialty.get() == Some(s)>
                            {s.as_str()}
                        </option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    set_contract_type.set(ContractType::parse(&event_target_value(&ev)));
                }>
                    <option value="" selected=move || contract_type.get().is_none()>
                        "Tous les contrats"
                    </option>
                    {move || contract_types.get().into_iter().map(|c| view! {
                        <option value=c.as_str() selected=move || contract_type.get() == Some(c)>
                            {c.as_str()}
                        </option>
                    }).collect_view()}
                </select>
                <button type="submit" class="btn btn-primary">"Rechercher"</button>
                <button type="button" class="btn btn-secondary" on:click=on_reset>
                    "Réinitialiser"
                </button>
            </form>

            {move || error.get().map(|msg| view! {
                <div class="alert alert-error">{msg}</div>
            })}

            {move || if loading.get() {
                view! { <p class="loading">"Chargement..."</p> }.into_any()
            } else if offers.get().is_empty() {
                view! { <p class="empty">"Aucune offre ne correspond à votre recherche."</p> }
                    .into_any()
            } else {
                view! {
                    <div class="offers-grid">
                        {offers.get().into_iter()
                            .map(|offer| view! { <JobOfferCard offer=offer/> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
