pub mod common;
pub mod library;
pub mod messages;
pub mod models;
pub mod schema;
pub mod sites;
pub mod tables;

pub use models::*;
pub use tables::{Table, TableStatements, UnknownTable};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a pool that opens connections on first use, so the gateway can
    /// answer (and reject) requests while the database is unreachable.
    pub fn connect_lazy(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_lazy(database_url)?;
        Ok(Self::new(pool))
    }

    /// Round-trip a constant through the database.
    pub async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
