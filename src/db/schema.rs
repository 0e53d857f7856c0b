use crate::db::{Database, Table};

impl Database {
    /// Create the gateway tables when they are missing.
    ///
    /// Each statement runs on its own; a failure part way leaves the earlier
    /// tables in place, and calling again finishes the job.
    pub async fn bootstrap_schema(&self) -> anyhow::Result<()> {
        for table in Table::ALL {
            sqlx::query(table.statements().create)
                .execute(&self.pool)
                .await?;
            tracing::debug!(table = %table, "Ensured table exists");
        }
        Ok(())
    }
}
