use axum::http::{
    header::{self, HeaderName, HeaderValue},
    Method,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, X-WP-Nexus-Auth, X-Requested-With";

/// Answers browser preflights and stamps `Access-Control-Allow-Origin: *`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-wp-nexus-auth"),
            HeaderName::from_static("x-requested-with"),
        ])
}

// CorsLayer only sends these on preflights; the gateway sends them on every response.
pub fn allow_methods_value() -> HeaderValue {
    HeaderValue::from_static(ALLOW_METHODS)
}

pub fn allow_headers_value() -> HeaderValue {
    HeaderValue::from_static(ALLOW_HEADERS)
}
