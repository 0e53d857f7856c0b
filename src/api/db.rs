use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;

use crate::api::common::{bad_request, internal_error, ApiError, Envelope, JsonBody};
use crate::db::Table;
use crate::AppState;

#[derive(Deserialize)]
pub struct DbRequest {
    action: String,
    table: String,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbAction {
    Get,
    Save,
    Delete,
}

impl FromStr for DbAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(DbAction::Get),
            "save" => Ok(DbAction::Save),
            "delete" => Ok(DbAction::Delete),
            other => Err(format!("action '{}' is not supported", other)),
        }
    }
}

pub async fn handle_db(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<DbRequest>,
) -> Result<Json<Envelope>, ApiError> {
    // Both checks happen before anything reaches the database
    let table = Table::from_str(&request.table).map_err(|e| bad_request("Invalid table", e))?;
    let action =
        DbAction::from_str(&request.action).map_err(|e| bad_request("Unsupported action", e))?;
    let data = request.data.unwrap_or(Value::Null);

    match action {
        DbAction::Get => {
            let rows = state.db.list_rows(table).await.map_err(internal_error)?;
            tracing::debug!(table = %table, rows = rows.len(), "Fetched rows");
            Ok(Json(Envelope::with_data(Value::Array(rows))))
        }
        DbAction::Save => {
            let id = state.db.save_row(table, data).await.map_err(internal_error)?;
            tracing::info!(table = %table, id = %id, "Saved row");
            Ok(Json(Envelope::ok()))
        }
        DbAction::Delete => {
            let (id, deleted) = state
                .db
                .delete_row_from(table, data)
                .await
                .map_err(internal_error)?;
            tracing::info!(table = %table, id = %id, deleted, "Deleted row");
            Ok(Json(Envelope::ok()))
        }
    }
}
