//! [`SecretKey`]: caller-owned key material passed into every signing and
//! sealing call.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CookieError;

/// Raw secret key bytes.
///
/// Any non-empty length is accepted here, which is all HMAC signing needs.
/// Sealing additionally requires one of the AES key sizes; see
/// [`crate::sealer::check_key`].
///
/// When this type is dropped the memory is zeroized with volatile writes the
/// compiler cannot elide. The bytes are never printed, not even through `Debug`.
#[derive(Clone)]
pub struct SecretKey(Box<[u8]>);

impl SecretKey {
    /// Wrap `bytes` as a secret key.
    ///
    /// # Errors
    ///
    /// Returns [`CookieError::InvalidKeyLength`] if `bytes` is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, CookieError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(CookieError::InvalidKeyLength(0));
        }
        Ok(Self(bytes.into_boxed_slice()))
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; an empty key cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_key() {
        assert!(matches!(
            SecretKey::new(Vec::<u8>::new()),
            Err(CookieError::InvalidKeyLength(0))
        ));
    }

    #[test]
    fn accepts_any_non_empty_length() {
        for len in [1, 10, 16, 33, 64] {
            let key = SecretKey::new(vec![7u8; len]).unwrap();
            assert_eq!(key.len(), len);
            assert!(!key.is_empty());
        }
    }

    #[test]
    fn wiped_on_drop() {
        fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}
        assert_zeroize_on_drop::<SecretKey>();
    }

    #[test]
    fn redacted_in_debug() {
        let key = SecretKey::new(*b"0123456789abcdef").unwrap();
        let rendered = format!("{key:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("0123"));
    }
}
