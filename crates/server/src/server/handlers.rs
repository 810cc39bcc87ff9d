//! Axum request handlers for all service endpoints.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{ErrorResponse, HealthResponse, Person};
use common::ServiceError;
use cookie_guard::{CookieError, HttpTransport};
use tracing::{debug, warn};

use super::state::AppState;

/// Which of the three cookie formats a route reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustLevel {
    /// Base64 only; the client can read and edit the value.
    Plain,
    /// HMAC-signed; the client can read but not edit the value.
    Signed,
    /// AES-GCM sealed; the client can neither read nor edit the value.
    Encrypted,
}

impl FromStr for TrustLevel {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "signed" => Ok(Self::Signed),
            "encrypted" => Ok(Self::Encrypted),
            other => Err(ServiceError::NotFound(format!("unknown cookie level: {other}"))),
        }
    }
}

/// `GET /:level/set` — write the sample [`Person`] cookie at the given level.
pub async fn set_cookie(State(state): State<AppState>, Path(level): Path<String>) -> Response {
    match level.parse() {
        Ok(level) => respond_set(&state, level),
        Err(e) => error_response(e),
    }
}

/// `GET /:level/get` — read the [`Person`] cookie at the given level.
pub async fn get_cookie(
    State(state): State<AppState>,
    Path(level): Path<String>,
    headers: HeaderMap,
) -> Response {
    match level.parse() {
        Ok(level) => respond_get(&state, level, &headers),
        Err(e) => error_response(e),
    }
}

/// `GET /set` — shorthand for `/signed/set`.
pub async fn set_signed(State(state): State<AppState>) -> Response {
    respond_set(&state, TrustLevel::Signed)
}

/// `GET /get` — shorthand for `/signed/get`.
pub async fn get_signed(State(state): State<AppState>, headers: HeaderMap) -> Response {
    respond_get(&state, TrustLevel::Signed, &headers)
}

/// `GET /health` — liveness check.
///
/// The key is validated at startup, so a running server is always ready.
pub async fn health() -> Response {
    let body = HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> Response {
    error_response(ServiceError::NotFound(
        "the requested resource does not exist".into(),
    ))
}

// ---------------------------------------------------------------------------
// Cookie helpers
// ---------------------------------------------------------------------------

fn respond_set(state: &AppState, level: TrustLevel) -> Response {
    match write_person(state, level, &Person::sample()) {
        Ok(set_cookie) => (StatusCode::OK, set_cookie, "cookie set!").into_response(),
        Err(e) => error_response(e),
    }
}

fn respond_get(state: &AppState, level: TrustLevel, headers: &HeaderMap) -> Response {
    match read_person(state, level, headers) {
        Ok(person) => (StatusCode::OK, person.render()).into_response(),
        Err(e) => error_response(e),
    }
}

/// Serialise `person` and write it at `level`, returning the `Set-Cookie` headers.
fn write_person(
    state: &AppState,
    level: TrustLevel,
    person: &Person,
) -> Result<HeaderMap, ServiceError> {
    let payload = person
        .to_bytes()
        .map_err(|e| ServiceError::Internal(format!("failed to serialise payload: {e}")))?;
    let cookie = cookie_guard::Cookie::new(state.cookie_name.as_str(), payload)
        .with_attributes(state.attributes.as_ref().clone());

    let mut transport = HttpTransport::default();
    let written = match level {
        TrustLevel::Plain => cookie_guard::write(&mut transport, cookie),
        TrustLevel::Signed => cookie_guard::write_signed(&mut transport, cookie, &state.key),
        TrustLevel::Encrypted => cookie_guard::write_encrypted(&mut transport, cookie, &state.key),
    };
    written.map_err(cookie_error)?;

    transport.into_headers().map_err(cookie_error)
}

/// Read the cookie at `level` from the request headers and deserialise it.
fn read_person(
    state: &AppState,
    level: TrustLevel,
    headers: &HeaderMap,
) -> Result<Person, ServiceError> {
    let transport = HttpTransport::from_request_headers(headers);
    let name = state.cookie_name.as_str();
    let payload = match level {
        TrustLevel::Plain => cookie_guard::read(&transport, name),
        TrustLevel::Signed => cookie_guard::read_signed(&transport, name, &state.key),
        TrustLevel::Encrypted => cookie_guard::read_encrypted(&transport, name, &state.key),
    }
    .map_err(cookie_error)?;

    Person::from_bytes(&payload).map_err(|_| {
        debug!(?level, "cookie payload is not a valid Person");
        ServiceError::InvalidCookie
    })
}

/// Map a cookie-layer error to the client-facing error.
fn cookie_error(err: CookieError) -> ServiceError {
    match err {
        CookieError::NotFound => ServiceError::CookieNotFound,
        CookieError::InvalidValue => ServiceError::InvalidCookie,
        other => ServiceError::Internal(other.to_string()),
    }
}

fn error_response(err: ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!(error = %err, "request failed");
    }
    (status, Json(ErrorResponse::from(&err))).into_response()
}
