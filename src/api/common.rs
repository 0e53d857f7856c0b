use axum::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::now_iso;

pub const INTERNAL_ERROR_MESSAGE: &str = "Gateway Internal Error";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Payload Too Large";

/// Error body shared by every failing route.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Upstream status code, set only for WordPress failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
            code: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
            code: None,
        }
    }

    pub fn upstream(status: StatusCode, status_text: &str) -> Self {
        Self {
            message: format!("WordPress API Error: {}", status_text),
            details: None,
            code: Some(status.as_u16()),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Catch-all for anything that went wrong while serving a request.
pub fn internal_error(err: impl std::fmt::Display) -> ApiError {
    let details = format!("{:#}", err);
    tracing::error!(error = %details, "Gateway Error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::with_details(INTERNAL_ERROR_MESSAGE, details)),
    )
}

pub fn bad_request(message: &str, err: impl std::fmt::Display) -> ApiError {
    tracing::warn!(error = %err, "{}", message);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::with_details(message, err.to_string())),
    )
}

pub async fn route_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::message("Route not found")),
    )
}

/// JSON body extractor that does not insist on a `Content-Type` header.
/// Bodies over the configured limit are a 413; undecodable bodies are
/// reported through the catch-all error.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            let status = rejection.status();
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                tracing::warn!("Request body over the configured limit");
                PAYLOAD_TOO_LARGE_MESSAGE
            } else {
                INTERNAL_ERROR_MESSAGE
            };
            (
                status,
                Json(ErrorResponse::with_details(message, rejection.body_text())),
            )
        })?;

        let value = serde_json::from_slice(&bytes).map_err(internal_error)?;
        Ok(JsonBody(value))
    }
}

/// Success wrapper returned by the `/db` route.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub timestamp: String,
}

impl Envelope {
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            timestamp: now_iso(),
        }
    }

    pub fn with_data(data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            ..Self::ok()
        }
    }
}
