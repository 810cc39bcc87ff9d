//! Configuration loading and validation for the demo server.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any required variable is missing or invalid,
//! including a secret key that cannot be used for sealing.

use anyhow::{Context, Result};
use cookie_guard::{codec, sealer, Attributes, SameSite, SecretKey};
use serde::Deserialize;

/// Validated server configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Hex-encoded secret key (16, 24 or 32 bytes once decoded). **Required.**
    pub cookie_secret: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Name of the demo cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// `Max-Age` of the demo cookie in seconds.
    #[serde(default = "default_cookie_max_age")]
    pub cookie_max_age_secs: i64,

    /// Whether the demo cookie carries the `Secure` flag.
    #[serde(default = "default_cookie_secure")]
    pub cookie_secure: bool,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    4000
}
fn default_cookie_name() -> String {
    "exampleCookie".into()
}
fn default_cookie_max_age() -> i64 {
    3600
}
fn default_cookie_secure() -> bool {
    true
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Decode `COOKIE_SECRET` into a key usable for both signing and sealing.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not hex or is not an AES key length.
    pub fn secret_key(&self) -> Result<SecretKey> {
        let bytes = hex::decode(self.cookie_secret.trim())
            .context("COOKIE_SECRET must be a hex string")?;
        let key = SecretKey::new(bytes).context("COOKIE_SECRET must not be empty")?;
        sealer::check_key(&key)
            .context("COOKIE_SECRET must decode to 16, 24 or 32 bytes")?;
        Ok(key)
    }

    /// Attributes applied to the demo cookie.
    pub fn cookie_attributes(&self) -> Attributes {
        Attributes {
            path: Some("/".into()),
            max_age_secs: Some(self.cookie_max_age_secs),
            http_only: true,
            secure: self.cookie_secure,
            same_site: Some(SameSite::Lax),
        }
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        self.secret_key()?;
        codec::validate_name(&self.cookie_name)
            .context("COOKIE_NAME must be a valid cookie name")?;
        if self.cookie_max_age_secs <= 0 {
            anyhow::bail!("COOKIE_MAX_AGE_SECS must be > 0");
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("cookie_secret", &"[REDACTED]")
            .field("listen_port", &self.listen_port)
            .field("cookie_name", &self.cookie_name)
            .field("cookie_max_age_secs", &self.cookie_max_age_secs)
            .field("cookie_secure", &self.cookie_secure)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "13d6b4dff8f84a10851021ec8608f814570d562c92fe6b5ec4c9f595bcb3234b";

    fn valid() -> Config {
        Config {
            cookie_secret: SECRET.into(),
            listen_port: default_listen_port(),
            cookie_name: default_cookie_name(),
            cookie_max_age_secs: default_cookie_max_age(),
            cookie_secure: default_cookie_secure(),
            log_level: default_log_level(),
        }
    }

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_listen_port(), 4000);
        assert_eq!(default_cookie_name(), "exampleCookie");
        assert_eq!(default_cookie_max_age(), 3600);
        assert!(default_cookie_secure());
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_accepts_valid_config() {
        let cfg = valid();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.secret_key().unwrap().len(), 32);
    }

    #[test]
    fn accepts_aes_128_and_192_keys() {
        for hex_len in [32, 48] {
            let cfg = Config {
                cookie_secret: SECRET[..hex_len].into(),
                ..valid()
            };
            assert!(cfg.validate().is_ok(), "{hex_len} hex chars should be accepted");
        }
    }

    #[test]
    fn validate_rejects_non_hex_secret() {
        let cfg = Config {
            cookie_secret: "not-hex".into(),
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_aes_key_length() {
        // 10 bytes: fine for HMAC, unusable for AES.
        let cfg = Config {
            cookie_secret: "00112233445566778899".into(),
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_secret() {
        let cfg = Config {
            cookie_secret: "".into(),
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_cookie_name() {
        let cfg = Config {
            cookie_name: "bad:name".into(),
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_max_age() {
        let cfg = Config {
            cookie_max_age_secs: 0,
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", valid());
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains(SECRET));
    }

    #[test]
    fn cookie_attributes_follow_config() {
        let cfg = Config {
            cookie_secure: false,
            cookie_max_age_secs: 60,
            ..valid()
        };
        let attrs = cfg.cookie_attributes();
        assert_eq!(attrs.path.as_deref(), Some("/"));
        assert_eq!(attrs.max_age_secs, Some(60));
        assert!(attrs.http_only);
        assert!(!attrs.secure);
        assert_eq!(attrs.same_site, Some(SameSite::Lax));
    }
}
