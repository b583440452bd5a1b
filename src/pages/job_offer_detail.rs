//! Job offer detail and application form.
//!
//! The form is prefilled from the logged-in candidate's profile; the address
//! block is only sent when a city was actually entered.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use web_sys::SubmitEvent;

use crate::api;
use crate::auth::{use_auth, AuthSessionStoreFields};
use crate::datetime;
use crate::models::{Address, CreateApplication, JobOffer, UserRole};

#[component]
pub fn JobOfferDetailPage() -> impl IntoView {
    let params = use_params_map();
    let auth = use_auth();
    // Stored so the submit handler stays Copy inside the nested views.
    let navigate = StoredValue::new_local(use_navigate());

    let offer_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|id| id.parse::<u32>().ok())
    });

    let (offer, set_offer) = signal(Option::<JobOffer>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let (firstname, set_firstname) = signal(String::new());
    let (lastname, set_lastname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (birthdate, set_birthdate) = signal(String::new());
    let (city, set_city) = signal(String::new());
    let (country, set_country) = signal(String::new());
    let (cover_letter, set_cover_letter) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    Effect::new(move |_| {
        let Some(id) = offer_id.get() else {
            set_loading.set(false);
            set_error.set(Some("Offre introuvable".to_string()));
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::job_offers::get_by_id(id).await {
                Ok(found) => set_offer.set(Some(found)),
                Err(err) => set_error.set(Some(err.user_message("Offre introuvable"))),
            }
            set_loading.set(false);
        });
    });

    // Prefill the form from the candidate's profile.
    Effect::new(move |_| {
        if let Some(user) = auth.user().get() {
            set_firstname.set(user.firstname.clone());
            set_lastname.set(user.lastname.clone());
            set_email.set(user.email.clone());
            set_phone.set(user.phone.clone().unwrap_or_default());
            set_birthdate.set(user.birthdate.clone().unwrap_or_default());
            if let Some(address) = user.address {
                set_city.set(address.city);
                set_country.set(address.country);
            }
        }
    });

    let show_form = move || {
        !matches!(
            auth.user().get().map(|u| u.role),
            Some(UserRole::Rh) | Some(UserRole::Admin)
        )
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(id) = offer_id.get_untracked() else {
            return;
        };
        let payload = CreateApplication {
            job_offer_id: id,
            firstname: firstname.get_untracked().trim().to_string(),
            lastname: lastname.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            birthdate: Some(birthdate.get_untracked())
                .filter(|b| !b.is_empty()),
            address: {
                let city = city.get_untracked().trim().to_string();
                (!city.is_empty()).then(|| Address {
                    city,
                    country: country.get_untracked().trim().to_string(),
                    ..Default::default()
                })
            },
            cover_letter: cover_letter.get_untracked().trim().to_string(),
        };
        if payload.firstname.is_empty()
            || payload.lastname.is_empty()
            || payload.email.is_empty()
            || payload.phone.is_empty()
            || payload.cover_letter.is_empty()
        {
            set_form_error.set(Some(
                "Veuillez remplir tous les champs obligatoires".to_string(),
            ));
            return;
        }
        set_submitting.set(true);
        set_form_error.set(None);
        spawn_local(async move {
            match api::applications::submit(&payload).await {
                Ok(_) => {
                    set_submitted.set(true);
                    gloo_timers::future::TimeoutFuture::new(2_000).await;
                    navigate.with_value(|nav| nav("/job-offers", Default::default()));
                }
                Err(err) => {
                    set_form_error
                        .set(Some(err.user_message("L'envoi de la candidature a échoué")));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="job-offer-detail-page">
            {move || if loading.get() {
                view! { <p class="loading">"Chargement..."</p> }.into_any()
            } else if let Some(offer) = offer.get() {
                view! {
                    <article class="offer-detail">
                        <h1>{offer.title.clone()}</h1>
                        <div class="offer-meta">
                            <span>{format!("Spécialité : {}", offer.specialty.as_str())}</span>
                            <span>{format!("Contrat : {}", offer.contract_type.as_str())}</span>
                            {offer.address.as_ref().map(|a| view! {
                                <span>{format!("Lieu : {}, {}", a.city, a.country)}</span>
                            })}
                            {offer.salary.map(|s| view! {
                                <span>{format!("Salaire : {s}€")}</span>
                            })}
                            <span>
                                {format!("Publiée le {}", datetime::format_date(&offer.creation_date))}
                            </span>
                        </div>
                        <div class="offer-content">
                            <p>{offer.content.clone()}</p>
                        </div>
                    </article>
                }
                .into_any()
            } else {
                view! {
                    <div class="alert alert-error">
                        {error.get().unwrap_or_else(|| "Offre introuvable".to_string())}
                    </div>
                }
                .into_any()
            }}

            {move || (offer.get().is_some() && show_form()).then(|| view! {
                <section class="apply-section">
                    <h2>"Postuler à cette offre"</h2>
                    {move || if submitted.get() {
                        view! {
                            <div class="alert alert-success">
                                "Votre candidature a bien été envoyée. Redirection..."
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            {move || form_error.get().map(|msg| view! {
                                <div class="alert alert-error">{msg}</div>
                            })}
                            <form class="apply-form" on:submit=on_submit>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="firstname">"Prénom *"</label>
                                        <input
                                            id="firstname"
                                            type="text"
                                            prop:value=firstname
                                            on:input=move |ev| set_firstname.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="lastname">"Nom *"</label>
                                        <input
                                            id="lastname"
                                            type="text"
                                            prop:value=lastname
                                            on:input=move |ev| set_lastname.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="apply-email">"Email *"</label>
                                        <input
                                            id="apply-email"
                                            type="email"
                                            prop:value=email
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="apply-phone">"Téléphone *"</label>
                                        <input
                                            id="apply-phone"
                                            type="tel"
                                            prop:value=phone
                                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="birthdate">"Date de naissance"</label>
                                        <input
                                            id="birthdate"
                                            type="date"
                                            prop:value=birthdate
                                            on:input=move |ev| set_birthdate.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="apply-city">"Ville"</label>
                                        <input
                                            id="apply-city"
                                            type="text"
                                            prop:value=city
                                            on:input=move |ev| set_city.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div class="form-group">
                                        <label for="apply-country">"Pays"</label>
                                        <input
                                            id="apply-country"
                                            type="text"
                                            prop:value=country
                                            on:input=move |ev| set_country.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>
                                <div class="form-group">
                                    <label for="cover-letter">"Lettre de motivation *"</label>
                                    <textarea
                                        id="cover-letter"
                                        rows="6"
                                        prop:value=cover_letter
                                        on:input=move |ev| set_cover_letter.set(event_target_value(&ev))
                                    ></textarea>
                                </div>
                                <button type="submit" class="btn btn-primary" disabled=submitting>
                                    {move || if submitting.get() { "Envoi..." } else { "Envoyer ma candidature" }}
                                </button>
                            </form>
                        }
                        .into_any()
                    }}
                </section>
            })}
        </div>
    }
}
