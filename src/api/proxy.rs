use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::common::{internal_error, ApiError, ErrorResponse, JsonBody};
use crate::wordpress::WpResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct ProxyRequest {
    domain: String,
    /// Pre-encoded Basic credential, forwarded as is
    auth: String,
    endpoint: String,
}

pub async fn proxy_wp(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<ProxyRequest>,
) -> Result<Response, ApiError> {
    tracing::debug!(domain = %body.domain, endpoint = %body.endpoint, "Proxying WordPress request");

    let response = state
        .wordpress
        .fetch(&body.domain, &body.auth, &body.endpoint)
        .await
        .map_err(internal_error)?;

    match response {
        WpResponse::Json(value) => Ok(Json(value).into_response()),
        WpResponse::Failed {
            status,
            status_text,
        } => Ok((status, Json(ErrorResponse::upstream(status, &status_text))).into_response()),
    }
}
