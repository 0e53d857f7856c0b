pub mod middleware;
pub mod verifier;

pub use middleware::{gatekeeper_middleware, AUTH_HEADER};
pub use verifier::{CredentialVerifier, StaticTokenVerifier};
