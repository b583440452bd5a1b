//! API services.
//!
//! One stateless module per resource; each operation is a single HTTP round
//! trip through `client`, no retries, no caching.

mod client;

pub mod applications;
pub mod auth;
pub mod interviews;
pub mod job_offers;
pub mod users;

pub use client::ApiError;
