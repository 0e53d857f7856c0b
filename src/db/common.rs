use anyhow::Context;
use serde_json::Value;

use crate::db::{
    models::{LibraryItem, LibraryRecord, Message, MessageRecord, RowId, Site, SiteRecord},
    Database, Table,
};

/// Decode the `data` payload of a request into a typed record.
fn decode<T: serde::de::DeserializeOwned>(table: Table, data: Value) -> anyhow::Result<T> {
    serde_json::from_value(data).with_context(|| format!("Invalid data for table '{}'", table))
}

// Table-generic operations used by the `/db` route
impl Database {
    /// All rows of `table`, newest id first, as JSON objects.
    pub async fn list_rows(&self, table: Table) -> anyhow::Result<Vec<Value>> {
        let select = table.statements().select;
        let rows = match table {
            Table::Sites => to_values(
                sqlx::query_as::<_, Site>(select)
                    .fetch_all(&self.pool)
                    .await?,
            )?,
            Table::Library => to_values(
                sqlx::query_as::<_, LibraryItem>(select)
                    .fetch_all(&self.pool)
                    .await?,
            )?,
            Table::Messages => to_values(
                sqlx::query_as::<_, Message>(select)
                    .fetch_all(&self.pool)
                    .await?,
            )?,
        };
        Ok(rows)
    }

    /// Insert or update one row keyed on `id`. Returns the id written.
    pub async fn save_row(&self, table: Table, data: Value) -> anyhow::Result<String> {
        match table {
            Table::Sites => {
                let site: SiteRecord = decode(table, data)?;
                self.upsert_site(&site).await?;
                Ok(site.id)
            }
            Table::Library => {
                let item: LibraryRecord = decode(table, data)?;
                self.upsert_library_item(&item).await?;
                Ok(item.id)
            }
            Table::Messages => {
                let message: MessageRecord = decode(table, data)?;
                self.upsert_message(&message).await?;
                Ok(message.id)
            }
        }
    }

    /// Delete the row with the given id. Missing rows are not an error.
    /// Returns the number of rows removed.
    pub async fn delete_row(&self, table: Table, id: &str) -> anyhow::Result<u64> {
        let result = sqlx::query(table.statements().delete)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Like `delete_row`, taking the raw request payload.
    pub async fn delete_row_from(&self, table: Table, data: Value) -> anyhow::Result<(String, u64)> {
        let RowId { id } = decode::<RowId>(table, data)?;
        let deleted = self.delete_row(table, &id).await?;
        Ok((id, deleted))
    }
}

fn to_values<T: serde::Serialize>(rows: Vec<T>) -> anyhow::Result<Vec<Value>> {
    rows.into_iter()
        .map(|row| serde_json::to_value(row).map_err(anyhow::Error::from))
        .collect()
}
