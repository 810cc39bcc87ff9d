//! Structured logging setup.
//!
//! # Telemetry invariants
//!
//! - **No cookie values or key material** may appear in any span attribute or
//!   log field. Cookie names and error kinds are fine.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`); `RUST_LOG`
//!   takes precedence when set.

pub mod init;

pub use init::init_telemetry;
