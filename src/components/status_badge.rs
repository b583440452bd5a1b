//! Status badges.
//!
//! The only place status enums are turned into labels and style tags; every
//! page renders badges through these.

use leptos::prelude::*;

use crate::models::{ApplicationStatus, InterviewStatus, InterviewType};

#[component]
pub fn ApplicationStatusBadge(
    status: ApplicationStatus,
    /// Candidate-facing wording instead of the HR one
    #[prop(optional)]
    candidate: bool,
) -> impl IntoView {
    let label = if candidate {
        status.candidate_label()
    } else {
        status.label()
    };
    view! {
        <span class=format!("status-badge {}", status.css_class())>{label}</span>
    }
}

#[component]
pub fn InterviewStatusBadge(status: InterviewStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", status.css_class())>{status.label()}</span>
    }
}

#[component]
pub fn InterviewTypeBadge(interview_type: InterviewType) -> impl IntoView {
    view! {
        <span class=format!("type-badge {}", interview_type.css_class())>
            {interview_type.short_label()}
        </span>
    }
}
