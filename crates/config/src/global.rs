//! The process-wide configuration slot.

use crate::Config;
use crate::error::{ErrorKind, Result};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

static CONFIG: OnceLock<Config> = OnceLock::new();

const UNSET: u8 = 0;
const OFF: u8 = 1;
const ON: u8 = 2;
static DEBUG: AtomicU8 = AtomicU8::new(UNSET);

/// Install `config` as the process-wide configuration.
///
/// Must happen before anything reads the configuration (rendering an error
/// with `{}`, or capturing a location); afterwards the slot is frozen and this
/// returns [`ErrorKind::AlreadyInstalled`].
pub fn install(config: Config) -> Result<()> {
    if CONFIG.set(config).is_err() {
        exn::bail!(ErrorKind::AlreadyInstalled);
    }
    tracing::debug!(config = ?CONFIG.get(), "Installed errtrail configuration");
    Ok(())
}

/// The process-wide configuration, loaded from the environment on first use.
///
/// An environment that cannot be interpreted falls back to the defaults: a
/// broken `DEBUG` variable must never stop an error from being reported.
pub fn current() -> &'static Config {
    CONFIG.get_or_init(|| match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = ?err, "Could not read errtrail configuration from environment; using defaults");
            Config::default()
        },
    })
}

/// Whether errors render as traces by default.
///
/// A value assigned with [`set_debug`] wins over the configuration.
pub fn debug() -> bool {
    match DEBUG.load(Ordering::Relaxed) {
        ON => true,
        OFF => false,
        _ => current().debug,
    }
}

/// Override the debug toggle, regardless of the environment.
pub fn set_debug(enabled: bool) {
    DEBUG.store(if enabled { ON } else { OFF }, Ordering::Relaxed);
}

/// Drop any override from [`set_debug`], reverting to the configuration.
pub fn clear_debug() {
    DEBUG.store(UNSET, Ordering::Relaxed);
}
