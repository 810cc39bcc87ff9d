//! Plain cookies: base64url encoding and the serialised size limit.
//!
//! Every other level ends up here: the signer and sealer build an envelope and
//! hand it to [`write`] as the cookie value.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use tracing::debug;

use crate::error::CookieError;
use crate::model::Cookie;
use crate::transport::CookieTransport;

/// Upper bound on the full serialised `Set-Cookie` form, attributes included.
pub const MAX_COOKIE_LEN: usize = 4096;

/// Encode raw bytes with the URL-safe base64 alphabet (padded).
pub fn encode(value: &[u8]) -> String {
    URL_SAFE.encode(value)
}

/// Decode text produced by [`encode`].
///
/// # Errors
///
/// Returns [`CookieError::InvalidValue`] if `text` is not valid URL-safe base64.
pub fn decode(text: &str) -> Result<Vec<u8>, CookieError> {
    URL_SAFE.decode(text).map_err(|_| CookieError::InvalidValue)
}

/// Check that `name` is a cookie token (RFC 6265 §4.1.1).
///
/// Tokens exclude `:`, which is what lets the sealer split its plaintext
/// unambiguously.
///
/// # Errors
///
/// Returns [`CookieError::InvalidName`] for empty names and names containing
/// control characters, whitespace, non-ASCII bytes or separators.
pub fn validate_name(name: &str) -> Result<(), CookieError> {
    const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={}";
    let valid = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !SEPARATORS.contains(&b));
    if valid {
        Ok(())
    } else {
        Err(CookieError::InvalidName(name.to_owned()))
    }
}

/// Encode the cookie value and hand the cookie to `transport`.
///
/// # Errors
///
/// - [`CookieError::InvalidName`] if the name is not a cookie token.
/// - [`CookieError::ValueTooLong`] if the serialised cookie exceeds
///   [`MAX_COOKIE_LEN`]; nothing is written in that case.
pub fn write<T>(transport: &mut T, cookie: Cookie) -> Result<(), CookieError>
where
    T: CookieTransport + ?Sized,
{
    validate_name(&cookie.name)?;

    let wire = cookie.to_wire(encode(&cookie.value));
    let len = wire.to_string().len();
    if len > MAX_COOKIE_LEN {
        debug!(name = %cookie.name, len, max = MAX_COOKIE_LEN, "cookie exceeds size limit");
        return Err(CookieError::ValueTooLong { len });
    }

    transport.set_cookie(wire);
    Ok(())
}

/// Fetch and decode the cookie named `name`.
///
/// # Errors
///
/// - [`CookieError::NotFound`] if the client did not send the cookie.
/// - [`CookieError::InvalidValue`] if its value is not valid base64.
pub fn read<T>(transport: &T, name: &str) -> Result<Vec<u8>, CookieError>
where
    T: CookieTransport + ?Sized,
{
    let text = transport.get_cookie(name).ok_or(CookieError::NotFound)?;
    decode(&text).inspect_err(|_| debug!(name, "cookie value is not valid base64"))
}
