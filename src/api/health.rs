use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

// The gateway is online whenever it can answer; the database state is reported, never raised.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (database, error) = match state.db.ping().await {
        Ok(()) => ("connected", None),
        Err(e) => {
            tracing::warn!(error = %e, "Database health probe failed");
            ("disconnected", Some(e.to_string()))
        }
    };

    Json(HealthResponse {
        status: "online".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        error,
    })
}
