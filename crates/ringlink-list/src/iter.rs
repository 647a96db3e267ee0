//! Borrowing iterator over list values.

use std::iter::FusedIterator;

use crate::DoublyLinkedList;
use crate::node::NodeId;

/// Front-to-back iterator over a [`DoublyLinkedList`].
///
/// Created by [`DoublyLinkedList::iter`]. Iterating from the back walks the
/// `prev` links starting at the tail; the two ends stop when they meet.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Self {
            list,
            front: list.head_id(),
            back: list.tail_id(),
        }
    }

    fn finish(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.front?;
        let node = self.list.node(id)?;
        if self.front == self.back {
            self.finish();
        } else {
            self.front = node.next;
        }
        Some(&node.value)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.back?;
        let node = self.list.node(id)?;
        if self.front == self.back {
            self.finish();
        } else {
            self.back = node.prev;
        }
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
        }
    }
}
