//! Thin HTTP client over the REST API.
//!
//! Attaches the bearer token once a session is cached and maps failures to
//! `ApiError`. Pages show `user_message` inline; nothing here retries.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session;

pub const BASE_URL: &str = "http://localhost:8080/api";

const GENERIC_MESSAGE: &str = "Une erreur est survenue. Veuillez réessayer.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response, carrying the server's message when it sent one
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("erreur réseau: {0}")]
    Network(String),
    #[error("réponse illisible: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided message, or the page's fallback wording.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn request(method: Method, path: &str) -> reqwest::RequestBuilder {
    let mut builder = reqwest::Client::new().request(method, format!("{BASE_URL}{path}"));
    if let Some(token) = session::token() {
        builder = builder.bearer_auth(token);
    }
    builder
}

async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let response = builder.send().await.map_err(|e| {
        web_sys::console::warn_1(&format!("[api] request failed: {e}").into());
        ApiError::Network(e.to_string())
    })?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                GENERIC_MESSAGE.to_string()
            } else {
                body
            }
        });
    web_sys::console::warn_1(&format!("[api] {status}: {message}").into());
    Err(ApiError::Http {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub(super) async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send(request(Method::GET, path)).await?).await
}

/// GET with query-string filters; absent filters are omitted by the caller.
pub(super) async fn get_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    decode(send(request(Method::GET, path).query(query)).await?).await
}

pub(super) async fn post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(send(request(Method::POST, path).json(body)).await?).await
}

pub(super) async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send(request(Method::POST, path).json(body)).await?;
    Ok(())
}

pub(super) async fn put<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(send(request(Method::PUT, path).json(body)).await?).await
}

pub(super) async fn patch<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(send(request(Method::PATCH, path).json(body)).await?).await
}

pub(super) async fn delete(path: &str) -> Result<(), ApiError> {
    send(request(Method::DELETE, path)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_wording() {
        let err = ApiError::Http {
            status: 409,
            message: "Candidature déjà traitée".into(),
        };
        assert_eq!(err.user_message("générique"), "Candidature déjà traitée");

        let err = ApiError::Network("fetch failed".into());
        assert_eq!(err.user_message("générique"), "générique");

        let err = ApiError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message("générique"), "générique");
    }
}
