use reqwest::{header, StatusCode};
use std::time::Duration;

pub const USER_AGENT: &str = "WP-Nexus-Pro-Serverless";

/// Outcome of a WordPress REST call.
#[derive(Debug)]
pub enum WpResponse {
    /// Upstream answered with a success status; body passed through untouched.
    Json(serde_json::Value),
    /// Upstream answered with a non-success status.
    Failed {
        status: StatusCode,
        status_text: String,
    },
}

/// Thin client for the `wp/v2` REST namespace of caller-named sites.
#[derive(Clone)]
pub struct WordPressClient {
    client: reqwest::Client,
}

impl WordPressClient {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET `{domain}/wp-json/wp/v2/{endpoint}` with a pre-encoded Basic credential.
    /// No retries.
    pub async fn fetch(
        &self,
        domain: &str,
        auth: &str,
        endpoint: &str,
    ) -> Result<WpResponse, reqwest::Error> {
        let url = rest_url(domain, endpoint);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Basic {}", auth))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "WordPress API returned an error");
            return Ok(WpResponse::Failed {
                status,
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.json::<serde_json::Value>().await?;
        Ok(WpResponse::Json(body))
    }
}

/// Build the REST URL, dropping one trailing slash from the domain.
pub fn rest_url(domain: &str, endpoint: &str) -> String {
    let domain = domain.strip_suffix('/').unwrap_or(domain);
    format!("{}/wp-json/wp/v2/{}", domain, endpoint)
}
