//! Job offer summary card used by the public listing.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::datetime;
use crate::models::JobOffer;

#[component]
pub fn JobOfferCard(offer: JobOffer) -> impl IntoView {
    let href = format!("/job-offers/{}", offer.id);
    let location = offer
        .address
        .as_ref()
        .map(|a| format!("{}, {}", a.city, a.country));
    let salary = offer.salary.map(|s| format!("{s}€"));

    view! {
        <div class="offer-card">
            <h3 class="offer-card-title">{offer.title.clone()}</h3>
            <div class="offer-card-details">
                <div class="detail-row">
                    <span class="detail-label">"Spécialité : "</span>
                    <span class="detail-value">{offer.specialty.as_str()}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">"Contrat : "</span>
                    <span class="detail-value">{offer.contract_type.as_str()}</span>
                </div>
                {location.map(|loc| view! {
                    <div class="detail-row">
                        <span class="detail-label">"Lieu : "</span>
                        <span class="detail-value">{loc}</span>
                    </div>
                })}
                {salary.map(|s| view! {
                    <div class="detail-row">
                        <span class="detail-label">"Salaire : "</span>
                        <span class="detail-value">{s}</span>
                    </div>
                })}
            </div>
            <div class="offer-card-footer">
                <span class="publish-date">
                    {format!("Publié le {}", datetime::format_date(&offer.creation_date))}
                </span>
                <A href=href attr:class="offer-card-link">"Voir le détail"</A>
            </div>
        </div>
    }
}
