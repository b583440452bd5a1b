//! Authentication endpoints.

use super::client;
use super::ApiError;
use crate::models::{AuthResponse, ChangePasswordRequest, LoginRequest};

pub async fn login(credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client::post("/auth/login", credentials).await
}

pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), ApiError> {
    client::post_no_content("/auth/change-password", request).await
}
