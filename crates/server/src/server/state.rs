//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use cookie_guard::{Attributes, SecretKey};

/// Application state shared across all request handlers.
///
/// All fields are `Arc`-wrapped so that Axum can clone the state for each
/// request without copying key material. The key is only ever read.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Secret key used for both signing and sealing.
    pub key: Arc<SecretKey>,
    /// Name of the demo cookie.
    pub cookie_name: Arc<String>,
    /// Attributes attached to every cookie the server writes.
    pub attributes: Arc<Attributes>,
}

impl AppState {
    /// Create a new [`AppState`].
    pub fn new(key: SecretKey, cookie_name: String, attributes: Attributes) -> Self {
        Self {
            key: Arc::new(key),
            cookie_name: Arc::new(cookie_name),
            attributes: Arc::new(attributes),
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// Creates a state with a fixed 32-byte key, suitable for tests only.
    fn default() -> Self {
        let key = SecretKey::new(vec![0x42u8; 32]).expect("non-empty test key");
        Self::new(
            key,
            "exampleCookie".into(),
            Attributes {
                path: Some("/".into()),
                max_age_secs: Some(3600),
                http_only: true,
                secure: true,
                same_site: Some(cookie_guard::SameSite::Lax),
            },
        )
    }
}
