// Library-related database operations
use crate::db::{models::LibraryRecord, Database, Table};

impl Database {
    /// Insert or update a library item. `upload_date` is only written on
    /// insert; when the caller omits it the server time is used.
    pub async fn upsert_library_item(&self, item: &LibraryRecord) -> anyhow::Result<()> {
        let upload_date = item
            .upload_date
            .clone()
            .unwrap_or_else(crate::now_iso);

        sqlx::query(Table::Library.statements().upsert)
            .bind(&item.id)
            .bind(&item.user_id)
            .bind(&item.name)
            .bind(&item.item_type)
            .bind(&item.file_name)
            .bind(&item.file_size)
            .bind(upload_date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
