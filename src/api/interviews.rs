//! Interview endpoints.

use super::client;
use super::ApiError;
use crate::models::{CreateInterview, Interview, InterviewStatus, UpdateInterview};

pub fn list_query(status: Option<InterviewStatus>) -> Vec<(&'static str, String)> {
    status
        .map(|s| vec![("status", s.as_str().to_string())])
        .unwrap_or_default()
}

pub async fn create(data: &CreateInterview) -> Result<Interview, ApiError> {
    client::post("/interviews/create", data).await
}

pub async fn get_all(status: Option<InterviewStatus>) -> Result<Vec<Interview>, ApiError> {
    client::get_query("/interviews/all", &list_query(status)).await
}

/// The logged-in candidate's own interviews.
pub async fn my_interviews() -> Result<Vec<Interview>, ApiError> {
    client::get("/interviews/me").await
}

pub async fn update(id: u32, data: &UpdateInterview) -> Result<Interview, ApiError> {
    client::put(&format!("/interviews/{id}"), data).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_optional() {
        assert!(list_query(None).is_empty());
        assert_eq!(
            list_query(Some(InterviewStatus::Planifie)),
            vec![("status", "PLANIFIE".to_string())]
        );
    }
}
