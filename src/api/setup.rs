use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::common::{internal_error, ApiError};
use crate::AppState;

#[derive(Serialize)]
pub struct SetupResponse {
    success: bool,
    message: String,
}

pub async fn setup_db(State(state): State<Arc<AppState>>) -> Result<Json<SetupResponse>, ApiError> {
    state.db.bootstrap_schema().await.map_err(internal_error)?;

    tracing::info!("Database schema initialized");

    Ok(Json(SetupResponse {
        success: true,
        message: "Database schema initialized".to_string(),
    }))
}
