// Message-related database operations
use crate::db::{models::MessageRecord, Database, Table};

impl Database {
    pub async fn upsert_message(&self, message: &MessageRecord) -> anyhow::Result<()> {
        sqlx::query(Table::Messages.statements().upsert)
            .bind(&message.id)
            .bind(message.sender_id.as_deref())
            .bind(message.receiver_id.as_deref())
            .bind(message.subject.as_deref())
            .bind(message.content.as_deref())
            .bind(message.timestamp.as_deref())
            .bind(message.read)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
