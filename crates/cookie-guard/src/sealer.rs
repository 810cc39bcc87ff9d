//! Encrypted cookies: AES-GCM with the cookie name sealed inside the plaintext.
//!
//! # Envelope
//!
//! ```text
//! nonce (NONCE_LEN bytes) || AES-GCM(name || ':' || value) || GCM tag
//! ```
//!
//! The key size selects AES-128, AES-192 or AES-256. A fresh nonce is drawn
//! from the OS CSPRNG for every write.
//!
//! **Never derive the nonce from a counter or cache it.** GCM nonce reuse under
//! one key breaks both confidentiality and authentication.

use aes_gcm::{
    aead::{consts::U12, rand_core::RngCore, Aead, KeyInit, OsRng},
    aes::Aes192,
    Aes128Gcm, Aes256Gcm, AesGcm, Nonce,
};
use tracing::debug;

use crate::codec;
use crate::error::CookieError;
use crate::key::SecretKey;
use crate::model::Cookie;
use crate::transport::CookieTransport;

/// Byte length of an AES-GCM nonce (96 bits).
pub const NONCE_LEN: usize = 12;

/// Accepted AES key lengths in bytes.
pub const AES_KEY_LENS: [usize; 3] = [16, 24, 32];

/// Separates the cookie name from the value inside the plaintext.
///
/// `:` can never appear in a cookie name, so splitting on its first
/// occurrence is unambiguous. It may appear in the value.
pub const SEPARATOR: u8 = b':';

type Aes192Gcm = AesGcm<Aes192, U12>;

enum GcmCipher {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl GcmCipher {
    fn new(key: &SecretKey) -> Result<Self, CookieError> {
        let bytes = key.as_bytes();
        let len = bytes.len();
        let cipher = match len {
            16 => Aes128Gcm::new_from_slice(bytes).map(Self::Aes128),
            24 => Aes192Gcm::new_from_slice(bytes).map(Self::Aes192),
            32 => Aes256Gcm::new_from_slice(bytes).map(Self::Aes256),
            _ => return Err(CookieError::InvalidKeyLength(len)),
        };
        cipher.map_err(|_| CookieError::InvalidKeyLength(len))
    }

    fn seal(&self, nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, aes_gcm::Error> {
        let nonce = Nonce::<U12>::from_slice(nonce);
        match self {
            Self::Aes128(c) => c.encrypt(nonce, plaintext),
            Self::Aes192(c) => c.encrypt(nonce, plaintext),
            Self::Aes256(c) => c.encrypt(nonce, plaintext),
        }
    }

    fn open(&self, nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, aes_gcm::Error> {
        let nonce = Nonce::<U12>::from_slice(nonce);
        match self {
            Self::Aes128(c) => c.decrypt(nonce, ciphertext),
            Self::Aes192(c) => c.decrypt(nonce, ciphertext),
            Self::Aes256(c) => c.decrypt(nonce, ciphertext),
        }
    }
}

/// Check that `key` can be used for sealing.
///
/// Callers should run this once at startup so that a misconfigured key fails
/// fast instead of on every request.
///
/// # Errors
///
/// Returns [`CookieError::InvalidKeyLength`] unless the key is 16, 24 or 32
/// bytes long.
pub fn check_key(key: &SecretKey) -> Result<(), CookieError> {
    GcmCipher::new(key).map(|_| ())
}

/// Encrypt the cookie name and value and write the envelope through the codec.
///
/// # Errors
///
/// - [`CookieError::InvalidKeyLength`] if the key is not an AES key size.
/// - Any error from [`codec::write`].
pub fn write_encrypted<T>(
    transport: &mut T,
    mut cookie: Cookie,
    key: &SecretKey,
) -> Result<(), CookieError>
where
    T: CookieTransport + ?Sized,
{
    let cipher = GcmCipher::new(key)?;

    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let mut plaintext = Vec::with_capacity(cookie.name.len() + 1 + cookie.value.len());
    plaintext.extend_from_slice(cookie.name.as_bytes());
    plaintext.push(SEPARATOR);
    plaintext.extend_from_slice(&cookie.value);

    let ciphertext = cipher
        .seal(&nonce, &plaintext)
        .map_err(|_| CookieError::InvalidValue)?;

    let mut envelope = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    envelope.extend_from_slice(&nonce);
    envelope.extend_from_slice(&ciphertext);
    cookie.value = envelope;

    codec::write(transport, cookie)
}

/// Read an encrypted cookie, authenticate it, and return the value.
///
/// # Errors
///
/// - [`CookieError::NotFound`] if the cookie is absent.
/// - [`CookieError::InvalidKeyLength`] if the key is not an AES key size.
/// - [`CookieError::InvalidValue`] if the envelope is malformed, fails
///   authentication, or was sealed for a different cookie name.
pub fn read_encrypted<T>(
    transport: &T,
    name: &str,
    key: &SecretKey,
) -> Result<Vec<u8>, CookieError>
where
    T: CookieTransport + ?Sized,
{
    let envelope = codec::read(transport, name)?;
    let cipher = GcmCipher::new(key)?;

    if envelope.len() < NONCE_LEN {
        return Err(CookieError::InvalidValue);
    }
    let (nonce, ciphertext) = envelope.split_at(NONCE_LEN);

    let plaintext = cipher.open(nonce, ciphertext).map_err(|_| {
        debug!(name, "encrypted cookie failed authentication");
        CookieError::InvalidValue
    })?;

    let split = plaintext
        .iter()
        .position(|&b| b == SEPARATOR)
        .ok_or(CookieError::InvalidValue)?;
    if &plaintext[..split] != name.as_bytes() {
        return Err(CookieError::InvalidValue);
    }

    Ok(plaintext[split + 1..].to_vec())
}
