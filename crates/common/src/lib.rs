//! Common types, protocol definitions, and errors shared across `cookie-guard` crates.

pub mod error;
pub mod protocol;

pub use error::ServiceError;
