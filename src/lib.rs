// WP-Nexus gateway: token-gated WordPress proxy and Postgres data bridge
pub mod api;
pub mod config;
pub mod db;
pub mod wordpress;

pub use config::GatewayConfig;
pub use db::Database;

use axum::{
    extract::DefaultBodyLimit,
    http::header,
    middleware,
    routing::{get, post},
    Router,
};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use api::auth::{CredentialVerifier, StaticTokenVerifier};
use api::cors::{allow_headers_value, allow_methods_value, cors_layer};
use wordpress::WordPressClient;

pub struct AppState {
    pub db: Database,
    pub wordpress: WordPressClient,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub body_limit: usize,
}

impl AppState {
    /// Build the shared state. No database connection is opened here.
    pub fn from_config(config: &GatewayConfig) -> anyhow::Result<Self> {
        let db = Database::connect_lazy(
            &config.database_url,
            config.pool_max,
            config.connect_timeout,
        )?;
        let wordpress = WordPressClient::new(config.wp_request_timeout)?;

        Ok(Self {
            db,
            wordpress,
            verifier: Arc::new(StaticTokenVerifier::new(config.api_token.clone())),
            body_limit: config.max_body_bytes,
        })
    }
}

/// The full HTTP surface: gatekeeper, CORS, routes and the 404 fallback.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/health",
            get(api::health)
                .post(api::health)
                .fallback(api::route_not_found),
        )
        .route(
            "/setup-db",
            post(api::setup_db).fallback(api::route_not_found),
        )
        .route(
            "/proxy-wp",
            post(api::proxy_wp).fallback(api::route_not_found),
        )
        .route("/db", post(api::handle_db).fallback(api::route_not_found))
        .fallback(api::route_not_found)
        .layer(middleware::from_fn_with_state(
            state.verifier.clone(),
            api::auth::gatekeeper_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            allow_methods_value(),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            allow_headers_value(),
        ))
        .with_state(state)
}

/// Current UTC time, e.g. `2024-01-01T00:00:00.000Z`. Used for response
/// timestamps and default library upload dates.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
