//! Source locations recorded at each wrapping point.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::panic::Location as CallSite;

/// A `file:line` pair identifying where an error was created or wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    file: &'static str,
    line: u32,
    column: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// The location of the caller, resolved with the process-wide
    /// [`Config`](errtrail_config::Config).
    ///
    /// Propagates through other `#[track_caller]` functions, so constructors
    /// report the site that called *them*.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        ConfiguredPrefix.resolve(CallSite::caller())
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Turns a compiler-provided call site into a [`Location`].
pub trait Resolve {
    fn resolve(&self, site: &'static CallSite<'static>) -> Location;
}

/// Strips a fixed prefix from the call site's file path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StripPrefix(pub &'static str);

impl Resolve for StripPrefix {
    fn resolve(&self, site: &'static CallSite<'static>) -> Location {
        let file = site.file();
        Location::new(file.strip_prefix(self.0).unwrap_or(file), site.line(), site.column())
    }
}

/// Strips whatever prefix the process-wide configuration names.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfiguredPrefix;

impl Resolve for ConfiguredPrefix {
    fn resolve(&self, site: &'static CallSite<'static>) -> Location {
        let config = errtrail_config::current();
        Location::new(config.strip(site.file()), site.line(), site.column())
    }
}
