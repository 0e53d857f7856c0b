use anyhow::{bail, Context, Result};
use std::time::Duration;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Runtime configuration for the gateway.
///
/// There are no built-in fallbacks for the database URL or the API token:
/// the process refuses to start when either is missing.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub database_url: String,
    pub api_token: String,
    pub bind_address: String,
    pub pool_max: u32,
    pub connect_timeout: Duration,
    pub wp_request_timeout: Option<Duration>,
    pub max_body_bytes: usize,
    pub auto_setup_db: bool,
}

impl GatewayConfig {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL")
            .or_else(|| get("DB_URL"))
            .context("DATABASE_URL environment variable must be set")?;

        let api_token =
            get("WP_NEXUS_API_TOKEN").context("WP_NEXUS_API_TOKEN environment variable must be set")?;

        let bind_address = get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let pool_max = parse_or(get("DB_POOL_MAX"), "DB_POOL_MAX", DEFAULT_POOL_MAX)?;
        if pool_max == 0 {
            bail!("DB_POOL_MAX must be greater than zero");
        }

        let connect_timeout_secs = parse_or(
            get("DB_CONNECT_TIMEOUT_SECS"),
            "DB_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;

        let wp_request_timeout = get("WP_REQUEST_TIMEOUT_SECS")
            .map(|s| {
                s.parse::<u64>()
                    .with_context(|| format!("WP_REQUEST_TIMEOUT_SECS is not a number: {}", s))
            })
            .transpose()?
            .map(Duration::from_secs);

        let max_body_bytes = parse_or(get("MAX_BODY_BYTES"), "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;

        let auto_setup_db = get("AUTO_SETUP_DB")
            .map(|s| matches!(s.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            api_token,
            bind_address,
            pool_max,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            wp_request_timeout,
            max_body_bytes,
            auto_setup_db,
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match value {
        Some(s) => s
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("{} is not a valid number: {}", key, s)),
        None => Ok(default),
    }
}
