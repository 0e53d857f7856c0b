use serde::{Deserialize, Deserializer, Serialize};

// Rows as stored. Serialized to callers in camelCase.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub user_id: String,
    pub domain: String,
    pub site_name: String,
    pub username: String,
    pub app_password: String,
    pub status: String,
    pub wp_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub item_type: String,
    pub file_name: String,
    pub file_size: String,
    pub upload_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: Option<String>,
    pub receiver_id: Option<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
    pub timestamp: Option<String>,
    pub read: bool,
}

// Save payloads, decoded from the `data` field of a `/db` request.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub id: String,
    pub user_id: String,
    pub domain: String,
    pub site_name: String,
    pub username: String,
    pub app_password: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub wp_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub file_name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub file_size: String,
    #[serde(default)]
    pub upload_date: Option<String>,
}

/// Only `id` is mandatory: an update of an existing message may carry just
/// the fields that change (`read`, `content`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub receiver_id: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub read: Option<bool>,
}

/// Identifies the row targeted by a delete.
#[derive(Debug, Clone, Deserialize)]
pub struct RowId {
    pub id: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Size::deserialize(deserializer)? {
        Size::Text(s) => s,
        Size::Number(n) => n.to_string(),
    })
}
