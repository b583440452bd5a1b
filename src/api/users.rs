//! User management endpoints (ADMIN only server-side).

use serde::Serialize;

use super::client;
use super::ApiError;
use crate::models::{CreateUser, UpdateUser, User, UserRole};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetActive {
    is_active: bool,
}

pub fn list_query(role: Option<UserRole>) -> Vec<(&'static str, String)> {
    role.map(|r| vec![("role", r.as_str().to_string())])
        .unwrap_or_default()
}

pub async fn get_all(role: Option<UserRole>) -> Result<Vec<User>, ApiError> {
    client::get_query("/users", &list_query(role)).await
}

pub async fn create(data: &CreateUser) -> Result<User, ApiError> {
    client::post("/users", data).await
}

pub async fn update(id: u32, data: &UpdateUser) -> Result<User, ApiError> {
    client::put(&format!("/users/{id}"), data).await
}

pub async fn set_active(id: u32, is_active: bool) -> Result<User, ApiError> {
    client::patch(&format!("/users/{id}/status"), &SetActive { is_active }).await
}

pub async fn delete(id: u32) -> Result<(), ApiError> {
    client::delete(&format!("/users/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_filter_optional() {
        assert!(list_query(None).is_empty());
        assert_eq!(
            list_query(Some(UserRole::Candidat)),
            vec![("role", "CANDIDAT".to_string())]
        );
    }
}
