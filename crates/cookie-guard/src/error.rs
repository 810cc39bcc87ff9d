//! Error taxonomy shared by the codec, signer and sealer.

use thiserror::Error;

/// Errors returned by every cookie read and write operation.
///
/// [`CookieError::InvalidValue`] deliberately covers every way an envelope can
/// be malformed or forged: bad base64, a value shorter than the tag or nonce,
/// a signature or AEAD tag mismatch, a missing separator, or a name mismatch
/// after decryption. Callers cannot tell these apart, and neither can a client
/// probing with crafted cookies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CookieError {
    /// The request carried no cookie with the requested name.
    #[error("cookie not found")]
    NotFound,

    /// The serialised `Set-Cookie` form would exceed [`crate::MAX_COOKIE_LEN`].
    #[error("cookie value too long: {len} bytes serialised")]
    ValueTooLong {
        /// Length of the rejected serialised cookie.
        len: usize,
    },

    /// The cookie value is malformed or failed authentication.
    #[error("invalid cookie value")]
    InvalidValue,

    /// The secret key has a length the algorithm cannot use.
    ///
    /// This is a configuration defect and should be caught at startup.
    #[error("invalid secret key length: {0} bytes")]
    InvalidKeyLength(usize),

    /// The cookie name contains characters outside the cookie token grammar.
    #[error("invalid cookie name: {0:?}")]
    InvalidName(String),

    /// A written cookie could not be rendered as a `Set-Cookie` header value.
    #[error("cannot render Set-Cookie header: {0}")]
    Header(String),
}
