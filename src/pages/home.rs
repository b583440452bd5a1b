//! Public landing page with the latest active offers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::JobOfferCard;
use crate::models::JobOffer;

#[component]
pub fn HomePage() -> impl IntoView {
    let (offers, set_offers) = signal(Vec::<JobOffer>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = api::job_offers::get_active().await {
                set_offers.set(list);
            }
            set_loading.set(false);
        });
    });

    let recent = Memo::new(move |_| offers.get().into_iter().take(6).collect::<Vec<_>>());

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Trouvez le poste qui vous correspond"</h1>
                <p>"RecrutPlus met en relation candidats et recruteurs, simplement."</p>
                <A href="/job-offers" attr:class="hero-cta">"Voir toutes les offres"</A>
            </section>

            <section class="recent-offers">
                <h2>"Dernières offres publiées"</h2>
                {move || if loading.get() {
                    view! { <p class="loading">"Chargement des offres..."</p> }.into_any()
                } else if recent.get().is_empty() {
                    view! { <p class="empty">"Aucune offre disponible pour le moment."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="offers-grid">
                            {recent.get().into_iter()
                                .map(|offer| view! { <JobOfferCard offer=offer/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </section>
        </div>
    }
}
