//! UI Components
//!
//! Reusable Leptos components.

mod footer;
mod job_offer_card;
mod navbar;
mod protected_route;
mod status_badge;

pub use footer::Footer;
pub use job_offer_card::JobOfferCard;
pub use navbar::Navbar;
pub use protected_route::ProtectedRoute;
pub use status_badge::{ApplicationStatusBadge, InterviewStatusBadge, InterviewTypeBadge};
