//! Payload and response types exchanged between the server and its clients.
//!
//! Cookie payloads are serialised as JSON before they are handed to the
//! cookie layer, which treats them as opaque bytes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Cookie payload
// ---------------------------------------------------------------------------

/// Demo payload stored in the example cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub hair_color: String,
}

impl Person {
    /// The fixed sample written by the `/set` endpoints.
    pub fn sample() -> Self {
        Self {
            name: "Kevin".into(),
            age: 23,
            height: 5.9,
            hair_color: "black".into(),
        }
    }

    /// Plain-text rendering returned by the `/get` endpoints.
    pub fn render(&self) -> String {
        format!(
            "Name: {:?}\nAge: {}\nHeight: {}\nHaircolor: {:?}\n",
            self.name, self.age, self.height, self.hair_color
        )
    }

    /// Serialise to the bytes stored in the cookie.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialisation fails.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Deserialise from cookie bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is not a JSON-encoded [`Person`].
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"invalid_cookie"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&crate::ServiceError> for ErrorResponse {
    fn from(err: &crate::ServiceError) -> Self {
        Self::new(err.code(), err.public_message())
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status; always `"ok"` once the server is accepting requests.
    pub status: String,
    /// Server version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceError;

    #[test]
    fn person_bytes_round_trip() {
        let p = Person::sample();
        let decoded = Person::from_bytes(&p.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, p);
    }

    #[test]
    fn person_rejects_garbage() {
        assert!(Person::from_bytes(b"\x00\x01not json").is_err());
    }

    #[test]
    fn render_matches_demo_output() {
        assert_eq!(
            Person::sample().render(),
            "Name: \"Kevin\"\nAge: 23\nHeight: 5.9\nHaircolor: \"black\"\n"
        );
    }

    #[test]
    fn error_response_from_service_error() {
        let e = ErrorResponse::from(&ServiceError::InvalidCookie);
        assert_eq!(e.code, "invalid_cookie");
        assert_eq!(e.message, "invalid cookie");
    }

    #[test]
    fn health_response_serde() {
        let h = HealthResponse {
            status: "ok".into(),
            version: "0.1.0".into(),
        };
        let json = serde_json::to_string(&h).unwrap();
        let decoded: HealthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.status, "ok");
    }
}
