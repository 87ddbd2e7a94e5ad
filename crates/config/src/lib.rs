//! Process-wide settings for `errtrail`.
//!
//! Two values influence how errors are presented:
//!
//! - **`debug`**: when set to any non-empty value, the default rendering of
//!   an error (`{}`) is the full location trace instead of the short message.
//!   Read from `DEBUG` or `ERRTRAIL_DEBUG`.
//! - **`path_prefix`**: stripped from the front of every recorded source file
//!   to keep traces readable. Read from `ERRTRAIL_PATH_PREFIX`.
//!
//! The environment is read once, on first use, and stored in a global. Both the
//! global configuration ([`install`]) and the debug toggle ([`set_debug`]) may be
//! overridden programmatically; treat them as startup-only configuration rather
//! than values to flip while errors are being rendered on other threads.

pub mod error;
mod global;

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;
use serde::de::{self, Deserializer, Visitor};
use std::fmt;

pub use crate::global::{clear_debug, current, debug, install, set_debug};

/// Environment variable prefix for namespaced settings.
pub const ENV_PREFIX: &str = "ERRTRAIL_";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render traces by default.
    #[serde(deserialize_with = "truthy")]
    pub debug: bool,
    /// Prefix stripped from recorded source file paths.
    pub path_prefix: Option<String>,
}

impl Config {
    /// Layered configuration sources, lowest precedence first:
    ///
    /// 1. Defaults (`debug = false`, no prefix),
    /// 2. The bare `DEBUG` variable,
    /// 3. `ERRTRAIL_`-prefixed variables.
    pub fn figment() -> Figment {
        Figment::new().merge(Env::raw().only(&["DEBUG"])).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration from the current process environment.
    pub fn from_env() -> Result<Self> {
        Self::figment().extract::<Self>().or_raise(|| ErrorKind::Invalid)
    }

    /// Strip the configured prefix from `file`, if it has one.
    pub fn strip<'a>(&self, file: &'a str) -> &'a str {
        match self.path_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => file.strip_prefix(prefix).unwrap_or(file),
            _ => file,
        }
    }
}

/// A flag is on when it is set to anything at all.
///
/// Only the empty string is false. `0`, `false` and `off` all turn the flag on.
pub fn is_truthy(value: &str) -> bool {
    !value.is_empty()
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    struct Truthy;
    impl<'de> Visitor<'de> for Truthy {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean, number or string flag")
        }

        // Figment types `DEBUG=0` and `DEBUG=false` before we see them; a
        // typed value still means the variable was set.
        fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<bool, E> {
            Ok(true)
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<bool, E> {
            Ok(true)
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<bool, E> {
            Ok(true)
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<bool, E> {
            Ok(true)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<bool, E> {
            Ok(is_truthy(v))
        }

        fn visit_char<E: de::Error>(self, v: char) -> std::result::Result<bool, E> {
            Ok(is_truthy(v.encode_utf8(&mut [0; 4])))
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<bool, E> {
            Ok(false)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<bool, E> {
            Ok(false)
        }
    }
    deserializer.deserialize_any(Truthy)
}
