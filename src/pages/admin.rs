//! Small admin dashboard with live counters and shortcuts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::filters;

#[component]
pub fn AdminPage() -> impl IntoView {
    let (application_count, set_application_count) = signal(Option::<usize>::None);
    let (pending_interviews, set_pending_interviews) = signal(Option::<usize>::None);
    let (user_count, set_user_count) = signal(Option::<usize>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = api::applications::get_all(None, None, None).await {
                set_application_count.set(Some(list.len()));
            }
            if let Ok(list) = api::interviews::get_all(None).await {
                set_pending_interviews.set(Some(filters::interview_stats(&list).planifie));
            }
            if let Ok(list) = api::users::get_all(None).await {
                set_user_count.set(Some(list.len()));
            }
        });
    });

    let counter = |value: ReadSignal<Option<usize>>| {
        move || {
            value
                .get()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "—".to_string())
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Administration"</h1>
            <div class="admin-cards">
                <A href="/applications" attr:class="admin-card">
                    <span class="stat-value">{counter(application_count)}</span>
                    <span class="stat-label">"Candidatures"</span>
                </A>
                <A href="/interviews" attr:class="admin-card">
                    <span class="stat-value">{counter(pending_interviews)}</span>
                    <span class="stat-label">"Entretiens planifiés"</span>
                </A>
                <A href="/users" attr:class="admin-card">
                    <span class="stat-value">{counter(user_count)}</span>
                    <span class="stat-label">"Utilisateurs"</span>
                </A>
            </div>
        </div>
    }
}
