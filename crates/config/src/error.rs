//! Configuration Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A configuration error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An environment variable could not be interpreted. Fix the environment.
    #[display("invalid configuration")]
    Invalid,
    /// The process-wide configuration was already read or installed. Install
    /// earlier during startup, before any error is rendered.
    #[display("configuration already installed")]
    AlreadyInstalled,
}
