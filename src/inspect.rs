//! Looking inside error trees, and handing them to code that expects
//! [`std::error::Error`].

use crate::node::{Error, Kind, Message};
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

impl Error {
    /// The single cause this node wraps.
    ///
    /// A join has several independent causes and no single one to prefer, so
    /// it returns `None`, as do leaves. Use
    /// [`causes`](crate::Node::causes) or [`unwrap_all`](Self::unwrap_all) to
    /// see the members of a join.
    pub fn cause(&self) -> Option<&Error> {
        match self.kind() {
            Kind::Wrap { cause, .. } => Some(cause),
            Kind::Leaf { .. } | Kind::Join { .. } => None,
        }
    }

    /// The first error of type `T` anywhere in the tree, searching foreign
    /// leaves left to right and each of their [`source`](StdError::source)
    /// chains.
    pub fn find<T: StdError + 'static>(&self) -> Option<&T> {
        self.foreign().find_map(|err| err.downcast_ref::<T>())
    }

    /// Returns `true` if an error of type `T` is anywhere in the tree.
    pub fn is<T: StdError + 'static>(&self) -> bool {
        self.find::<T>().is_some()
    }

    /// Returns `true` if an error equal to `target` is anywhere in the tree.
    pub fn contains<T: StdError + PartialEq + 'static>(&self, target: &T) -> bool {
        self.foreign().filter_map(|err| err.downcast_ref::<T>()).any(|err| err == target)
    }

    fn foreign(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        self.unwrap_all_innermost()
            .into_iter()
            .filter_map(|node| match node.kind() {
                Kind::Leaf { message: Message::Foreign(err), .. } => Some(err.as_ref() as &(dyn StdError + 'static)),
                _ => None,
            })
            .flat_map(|err| iter::successors(Some(err), |err| (*err).source()))
    }
}

/// Presents an [`Error`] as a [`std::error::Error`] trait object.
struct Boxed(Error);

impl Display for Boxed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for Boxed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

// No `source()`: `Display` already renders every node, foreign leaves included.
impl StdError for Boxed {}

impl From<Error> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(err: Error) -> Self {
        Box::new(Boxed(err))
    }
}

impl From<Error> for Box<dyn StdError + 'static> {
    fn from(err: Error) -> Self {
        Box::new(Boxed(err))
    }
}
