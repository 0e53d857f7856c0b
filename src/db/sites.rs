// Site-related database operations
use crate::db::{models::SiteRecord, Database, Table};

impl Database {
    pub async fn upsert_site(&self, site: &SiteRecord) -> anyhow::Result<()> {
        sqlx::query(Table::Sites.statements().upsert)
            .bind(&site.id)
            .bind(&site.user_id)
            .bind(&site.domain)
            .bind(&site.site_name)
            .bind(&site.username)
            .bind(&site.app_password)
            .bind(site.status.as_deref())
            .bind(site.wp_version.as_deref())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
