/// Decides whether the credential presented with a request is acceptable.
/// A missing header is presented as the empty string.
///
/// The gatekeeper only sees this trait, so a different scheme can be plugged
/// in without touching routing.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, presented: &str) -> bool;
}

/// Accepts exactly one shared token.
pub struct StaticTokenVerifier {
    expected: String,
}

impl StaticTokenVerifier {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl CredentialVerifier for StaticTokenVerifier {
    fn verify(&self, presented: &str) -> bool {
        !self.expected.is_empty() && presented == self.expected
    }
}
