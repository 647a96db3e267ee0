//! Arena node and its stable handle.

use std::fmt::{self, Display};

/// Stable identity of a node inside a [`DoublyLinkedList`](crate::DoublyLinkedList).
///
/// A `NodeId` stays attached to the same node for as long as the node is in
/// the list, including across [`reverse`](crate::DoublyLinkedList::reverse).
/// Once the node is removed, its id may be handed out again to a later insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena slot backing this node.
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}
