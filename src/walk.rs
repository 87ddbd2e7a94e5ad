//! Tree traversal.
//!
//! The walker only asks a node what it unwraps to ([`Node::causes`]); it never
//! looks at concrete node kinds. Any tree-shaped type implementing [`Node`] can
//! be enumerated with [`unwrap_all`] and [`unwrap_all_innermost`].
//!
//! Both enumerations are depth-first, left to right, and list causes before
//! the effects that wrap them: the deepest causes come first and the node the
//! walk started from comes last.

use crate::node::{Error, Kind};

/// What a node unwraps to.
#[derive(Debug)]
pub enum Causes<'a, N> {
    /// Nothing: the node is innermost.
    None,
    /// A single wrapped cause.
    One(&'a N),
    /// Independent causes, in construction order.
    Many(&'a [N]),
}

impl<N> Causes<'_, N> {
    /// Returns `true` if there is nothing left to unwrap.
    pub fn is_empty(&self) -> bool {
        match self {
            Causes::None => true,
            Causes::One(_) => false,
            Causes::Many(causes) => causes.is_empty(),
        }
    }
}

/// A node in an error tree.
pub trait Node: Sized {
    fn causes(&self) -> Causes<'_, Self>;
}

impl Node for Error {
    fn causes(&self) -> Causes<'_, Self> {
        match self.kind() {
            Kind::Leaf { .. } => Causes::None,
            Kind::Wrap { cause, .. } => Causes::One(cause),
            Kind::Join { causes } => Causes::Many(causes.as_slice()),
        }
    }
}

/// Returns `true` if `node` has no causes to unwrap.
pub fn is_innermost<N: Node>(node: &N) -> bool {
    node.causes().is_empty()
}

/// Every node of the tree rooted at `node`, causes before effects.
pub fn unwrap_all<N: Node>(node: &N) -> Vec<&N> {
    let mut nodes = Vec::new();
    collect(node, &mut nodes, |_| true);
    nodes
}

/// Only the innermost nodes of the tree rooted at `node`, in the same relative
/// order as [`unwrap_all`].
pub fn unwrap_all_innermost<N: Node>(node: &N) -> Vec<&N> {
    let mut nodes = Vec::new();
    collect(node, &mut nodes, is_innermost);
    nodes
}

fn collect<'a, N: Node>(node: &'a N, out: &mut Vec<&'a N>, keep: fn(&N) -> bool) {
    match node.causes() {
        Causes::None => {},
        Causes::One(cause) => collect(cause, out, keep),
        Causes::Many(causes) => {
            for cause in causes {
                collect(cause, out, keep);
            }
        },
    }
    if keep(node) {
        out.push(node);
    }
}

impl Error {
    /// Returns `true` if this node wraps nothing.
    pub fn is_innermost(&self) -> bool {
        is_innermost(self)
    }

    /// Every node of this tree, causes before effects; `self` is last.
    pub fn unwrap_all(&self) -> Vec<&Error> {
        unwrap_all(self)
    }

    /// The innermost nodes (root causes) of this tree, left to right.
    pub fn unwrap_all_innermost(&self) -> Vec<&Error> {
        unwrap_all_innermost(self)
    }
}
