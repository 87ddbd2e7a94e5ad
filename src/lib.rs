//! Error trees annotated with the source location of every wrapping point.
//!
//! An [`Error`] is one of three kinds of node:
//!
//! - **Leaf**: a terminal error, either a message created with [`Error::new`]
//!   (located at the call site) or a foreign [`std::error::Error`] converted
//!   with [`From`] (unlocated).
//! - **Wrap**: a message and call-site location around a single cause, created
//!   with [`Error::wrap`], [`wrap`], [`wrapf!`] or [`ResultExt`].
//! - **Join**: independent causes in order, created with [`join`].
//!
//! Errors render either as a short message or as a full trace with a
//! `file:line` at each wrapping point:
//!
//! ```
//! use errtrail::Error;
//!
//! let err = Error::new("an error").wrap("another error");
//! assert_eq!(err.plain().to_string(), "another error: an error");
//! assert!(err.trace().to_string().contains(": another error: "));
//! ```
//!
//! `{}` picks between the two with the process-wide debug toggle, read once
//! from `DEBUG` / `ERRTRAIL_DEBUG` (see [`errtrail_config`]). `{:#}` always
//! renders the trace.
//!
//! The tree can be walked with [`Error::unwrap_all`] (every node, causes
//! before effects) and [`Error::unwrap_all_innermost`] (only root causes).

mod construct;
mod format;
mod inspect;
mod location;
mod node;
mod walk;

pub use crate::construct::{ResultExt, attach_location, join, wrap};
pub use crate::format::{Render, Style};
pub use crate::location::{ConfiguredPrefix, Location, Resolve, StripPrefix};
pub use crate::node::Error;
pub use crate::walk::{Causes, Node, is_innermost, unwrap_all, unwrap_all_innermost};

/// Result type alias with an [`Error`] tree as the error.
pub type Result<T, E = Error> = std::result::Result<T, E>;
