//! The error tree.

use crate::Location;
use std::borrow::Cow;
use std::error::Error as StdError;

pub(crate) type Foreign = Box<dyn StdError + Send + Sync + 'static>;

/// An error node: a leaf, a located wrap of one cause, or a join of many.
///
/// Nodes are immutable once built. Construct them with [`Error::new`],
/// [`Error::wrap`], [`Error::located`], [`join`](crate::join) or the
/// [`errorf!`](crate::errorf)/[`wrapf!`](crate::wrapf) macros; convert
/// foreign errors with [`From`].
pub struct Error(Box<Kind>);

pub(crate) enum Kind {
    Leaf { message: Message, location: Option<Location> },
    Wrap { message: Cow<'static, str>, location: Location, cause: Error },
    Join { causes: Vec<Error> },
}

pub(crate) enum Message {
    Text(Cow<'static, str>),
    Foreign(Foreign),
}

impl Error {
    pub(crate) fn from_kind(kind: Kind) -> Self {
        Self(Box::new(kind))
    }

    pub(crate) fn kind(&self) -> &Kind {
        &self.0
    }

    /// The message attached at this node, without any of its causes.
    ///
    /// Joins have no message of their own; foreign leaves have theirs rendered
    /// on demand, so neither is available as a borrowed string.
    pub fn message(&self) -> Option<&str> {
        match self.kind() {
            Kind::Leaf { message: Message::Text(text), .. } | Kind::Wrap { message: text, .. } => Some(text),
            Kind::Leaf { message: Message::Foreign(_), .. } | Kind::Join { .. } => None,
        }
    }

    /// Where this node was created, if it records a location.
    pub fn location(&self) -> Option<Location> {
        match self.kind() {
            Kind::Leaf { location, .. } => *location,
            Kind::Wrap { location, .. } => Some(*location),
            Kind::Join { .. } => None,
        }
    }
}
