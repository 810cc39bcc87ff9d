//! Signed cookies: HMAC-SHA256 over the cookie name and value.
//!
//! # Envelope
//!
//! ```text
//! tag (TAG_LEN bytes) || value
//! ```
//!
//! The tag covers `name || value`, so a signed value cannot be replayed under a
//! different cookie name.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::codec;
use crate::error::CookieError;
use crate::key::SecretKey;
use crate::model::Cookie;
use crate::transport::CookieTransport;

type HmacSha256 = Hmac<Sha256>;

/// Byte length of an HMAC-SHA256 tag.
pub const TAG_LEN: usize = 32;

/// Sign the cookie value and write it through the codec.
///
/// # Errors
///
/// Any error from [`codec::write`]; [`CookieError::ValueTooLong`] counts the
/// tag towards the limit.
pub fn write_signed<T>(
    transport: &mut T,
    mut cookie: Cookie,
    key: &SecretKey,
) -> Result<(), CookieError>
where
    T: CookieTransport + ?Sized,
{
    let tag = keyed_mac(key, &cookie.name, &cookie.value)?.finalize().into_bytes();

    let mut envelope = Vec::with_capacity(TAG_LEN + cookie.value.len());
    envelope.extend_from_slice(&tag);
    envelope.extend_from_slice(&cookie.value);
    cookie.value = envelope;

    codec::write(transport, cookie)
}

/// Read a signed cookie and return its value if the tag verifies.
///
/// # Errors
///
/// - [`CookieError::NotFound`] if the cookie is absent.
/// - [`CookieError::InvalidValue`] if the value is not base64, is shorter than
///   [`TAG_LEN`], or its tag does not match.
pub fn read_signed<T>(transport: &T, name: &str, key: &SecretKey) -> Result<Vec<u8>, CookieError>
where
    T: CookieTransport + ?Sized,
{
    let mut envelope = codec::read(transport, name)?;
    if envelope.len() < TAG_LEN {
        return Err(CookieError::InvalidValue);
    }

    let value = envelope.split_off(TAG_LEN);
    keyed_mac(key, name, &value)?
        .verify_slice(&envelope)
        .map_err(|_| CookieError::InvalidValue)?;

    Ok(value)
}

fn keyed_mac(key: &SecretKey, name: &str, value: &[u8]) -> Result<HmacSha256, CookieError> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|_| CookieError::InvalidKeyLength(key.len()))?;
    mac.update(name.as_bytes());
    mac.update(value);
    Ok(mac)
}
