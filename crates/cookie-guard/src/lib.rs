//! Tamper-evident and confidential values in HTTP cookies.
//!
//! Three independent trust levels, each a stateless write/read pair:
//!
//! | level | write | read | client can read? | client can modify? |
//! |---|---|---|---|---|
//! | plain | [`write`] | [`read`] | yes | yes |
//! | signed | [`write_signed`] | [`read_signed`] | yes | no (HMAC-SHA256) |
//! | encrypted | [`write_encrypted`] | [`read_encrypted`] | no | no (AES-GCM) |
//!
//! Values are opaque byte strings; serialise payloads before writing them.
//! Cookies travel through a [`CookieTransport`], usually an [`HttpTransport`]
//! built from the request headers.
//!
//! ```
//! use cookie::CookieJar;
//! use cookie_guard::{read_signed, write_signed, Cookie, SecretKey};
//!
//! let key = SecretKey::new(vec![0u8; 32]).unwrap();
//! let mut jar = CookieJar::new();
//! write_signed(&mut jar, Cookie::new("session", "hello"), &key).unwrap();
//! assert_eq!(read_signed(&jar, "session", &key).unwrap(), b"hello");
//! ```

pub mod codec;
pub mod error;
pub mod key;
pub mod model;
pub mod sealer;
pub mod signer;
pub mod transport;

pub use codec::{read, write, MAX_COOKIE_LEN};
pub use cookie::SameSite;
pub use error::CookieError;
pub use key::SecretKey;
pub use model::{Attributes, Cookie};
pub use sealer::{read_encrypted, write_encrypted};
pub use signer::{read_signed, write_signed};
pub use transport::{CookieTransport, HttpTransport};
