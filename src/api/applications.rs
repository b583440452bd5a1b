//! Application endpoints.

use super::client;
use super::ApiError;
use crate::models::{Application, ApplicationStatus, CreateApplication, ProcessApplication};

/// Query-string filters for the admin list; absent filters are omitted, never
/// sent empty.
pub fn list_query(
    status: Option<ApplicationStatus>,
    job_offer_id: Option<u32>,
    email: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(status) = status {
        query.push(("status", status.as_str().to_string()));
    }
    if let Some(id) = job_offer_id {
        query.push(("jobOfferId", id.to_string()));
    }
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        query.push(("email", email.to_string()));
    }
    query
}

pub async fn submit(data: &CreateApplication) -> Result<Application, ApiError> {
    client::post("/applications/submit", data).await
}

pub async fn get_by_id(id: u32) -> Result<Application, ApiError> {
    client::get(&format!("/applications/{id}")).await
}

/// The logged-in candidate's own applications.
pub async fn my_applications() -> Result<Vec<Application>, ApiError> {
    client::get("/applications/me").await
}

pub async fn get_all(
    status: Option<ApplicationStatus>,
    job_offer_id: Option<u32>,
    email: Option<&str>,
) -> Result<Vec<Application>, ApiError> {
    client::get_query("/applications", &list_query(status, job_offer_id, email)).await
}

pub async fn process(id: u32, data: &ProcessApplication) -> Result<Application, ApiError> {
    client::put(&format!("/applications/{id}/process"), data).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_filters_are_omitted() {
        assert!(list_query(None, None, None).is_empty());
        assert!(list_query(None, None, Some("")).is_empty());

        let query = list_query(Some(ApplicationStatus::EnCours), Some(4), None);
        assert_eq!(
            query,
            vec![
                ("status", "EN_COURS".to_string()),
                ("jobOfferId", "4".to_string()),
            ]
        );

        let query = list_query(None, None, Some("a@b.fr"));
        assert_eq!(query, vec![("email", "a@b.fr".to_string())]);
    }
}
