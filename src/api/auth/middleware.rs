use axum::{
  extract::{Request, State},
  http::{Method, StatusCode},
  middleware::Next,
  response::{IntoResponse, Response},
  Json,
};
use std::sync::Arc;

use super::verifier::CredentialVerifier;
use crate::api::common::ErrorResponse;

pub const AUTH_HEADER: &str = "x-wp-nexus-auth";

// Runs in front of every route: answers preflights, then checks the token.
// Nothing behind it (body parsing, database) runs for a rejected request.
pub async fn gatekeeper_middleware(
  State(verifier): State<Arc<dyn CredentialVerifier>>,
  request: Request,
  next: Next,
) -> Response {
  // Inside `app()` the CorsLayer answers OPTIONS before this runs; this
  // branch covers routers mounted without that layer.
  if request.method() == Method::OPTIONS {
    return StatusCode::OK.into_response();
  }

  let presented = request
    .headers()
    .get(AUTH_HEADER)
    .and_then(|h| h.to_str().ok())
    .unwrap_or("");

  if !verifier.verify(presented) {
    tracing::warn!(
      method = %request.method(),
      path = request.uri().path(),
      "Rejected request with invalid API token"
    );
    return (
      StatusCode::UNAUTHORIZED,
      Json(ErrorResponse::message("Invalid API Token")),
    )
      .into_response();
  }

  next.run(request).await
}
