//! The doubly linked list itself.
//!
//! Nodes are stored in `nodes`, a vector of optional slots. A live node
//! occupies `Some(node)`; a vacated slot is `None` and its index sits on the
//! `free` stack until the next insert reuses it. All rewiring goes through
//! [`NodeId`]s, so `reverse` and `delete` move links, never values.

use std::fmt::{self, Debug, Display};

use crate::iter::Iter;
use crate::node::{Node, NodeId};

/// A doubly linked list with head/tail tracking.
///
/// Absence is always reported through `Option` (or `bool` for
/// [`search`](Self::search)): removing from an empty list, asking for the
/// max of an empty list or for an index past the end all yield `None`.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    /// Arena of node slots. `None` marks a vacated slot.
    nodes: Vec<Option<Node<T>>>,
    /// Vacated slots available for reuse.
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns `true` if the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Identity of the head node, if any.
    pub fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    /// Identity of the tail node, if any.
    pub fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    /// Returns the value stored in the node `id`, if that node is live.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    /// Counts the nodes by walking from head to tail. O(n).
    pub fn length(&self) -> usize {
        self.ids().count()
    }

    /// Prepends `value`, making it the new head. O(1).
    ///
    /// On an empty list the new node is also the tail.
    pub fn insert(&mut self, value: T) {
        let old_head = self.head;
        let id = self.allocate(value, None, old_head);
        match old_head {
            Some(old) => self.set_prev(old, Some(id)),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Unlinks the head node and returns its value. O(1).
    pub fn remove_head(&mut self) -> Option<T> {
        let id = self.head?;
        self.unlink(id)
    }

    /// Unlinks the tail node and returns its value. O(1).
    pub fn remove_tail(&mut self) -> Option<T> {
        let id = self.tail?;
        self.unlink(id)
    }

    /// Returns the value `n` positions after the head (0-indexed).
    pub fn find_nth_from_beginning(&self, n: usize) -> Option<&T> {
        let found = self.iter().nth(n);
        if found.is_none() {
            tracing::debug!(n, "index exceeds the list length");
        }
        found
    }

    /// Returns the value `n` positions before the tail (0-indexed).
    pub fn find_nth_from_end(&self, n: usize) -> Option<&T> {
        let found = self.iter().rev().nth(n);
        if found.is_none() {
            tracing::debug!(n, "index from the end exceeds the list length");
        }
        found
    }

    /// Returns the middle value by walking inward from both ends.
    ///
    /// The forward cursor advances every step; the backward cursor advances
    /// only if the forward one has not just landed on it. For an odd length
    /// this meets at the true middle. For an even length it settles on the
    /// upper of the two middle nodes (`[1, 2, 3, 4]` yields `3`).
    pub fn find_middle_value(&self) -> Option<&T> {
        let mut forward = self.head?;
        let mut backward = self.tail?;
        while forward != backward {
            forward = self.node(forward)?.next?;
            if forward != backward {
                backward = self.node(backward)?.prev?;
            }
        }
        self.get(forward)
    }

    /// Reverses the list in place. O(n).
    ///
    /// Every node keeps its [`NodeId`]; only `prev`/`next` are swapped and
    /// head and tail trade places.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(id) = current {
            current = self.node_mut(id).and_then(|node| {
                std::mem::swap(&mut node.prev, &mut node.next);
                node.prev
            });
        }
        std::mem::swap(&mut self.head, &mut self.tail);
        tracing::trace!(head = ?self.head, tail = ?self.tail, "list reversed");
    }

    /// Drops every node and releases the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    /// Lazy front-to-back view of the values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.head, |&id| self.node(id).and_then(|node| node.next))
    }

    fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.node_mut(id) {
            node.next = next;
        }
    }

    fn allocate(&mut self, value: T, prev: Option<NodeId>, next: Option<NodeId>) -> NodeId {
        let node = Node { value, prev, next };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId::new(self.nodes.len());
                self.nodes.push(Some(node));
                id
            }
        }
    }

    /// Links a fresh node holding `value` directly after `anchor`.
    fn insert_after(&mut self, anchor: NodeId, value: T) {
        let next = self.node(anchor).and_then(|node| node.next);
        let id = self.allocate(value, Some(anchor), next);
        self.set_next(anchor, Some(id));
        match next {
            Some(next) => self.set_prev(next, Some(id)),
            None => self.tail = Some(id),
        }
    }

    /// Detaches `id` from its neighbours, repairing head/tail, and vacates
    /// its slot.
    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let node = self.nodes.get_mut(id.index())?.take()?;
        self.free.push(id);

        match node.prev {
            Some(prev) => self.set_next(prev, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.set_prev(next, node.prev),
            None => self.tail = node.prev,
        }

        debug_assert_eq!(self.head.is_none(), self.tail.is_none());
        Some(node.value)
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns `true` if any node holds `value`. O(n).
    pub fn search(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }

    /// Removes the first node (from the head) equal to `value`.
    ///
    /// Returns `false` and leaves the list untouched when no node matches.
    pub fn delete(&mut self, value: &T) -> bool {
        let Some(id) = self.ids().find(|&id| self.get(id) == Some(value)) else {
            tracing::trace!("delete: no node holds the requested value");
            return false;
        };
        self.unlink(id).is_some()
    }
}

impl<T: Ord> DoublyLinkedList<T> {
    /// Inserts `value` keeping an ascending list ascending. O(n).
    ///
    /// A value less than or equal to the head becomes the new head.
    /// Otherwise the scan stops at the first node whose successor is not
    /// smaller than `value` and links the new node after it, so the new
    /// node lands before any equal values further along.
    pub fn insert_ascending(&mut self, value: T) {
        let Some(head) = self.head else {
            self.insert(value);
            return;
        };
        if self.get(head).is_some_and(|first| value <= *first) {
            self.insert(value);
            return;
        }

        let mut current = head;
        while let Some(next) = self.node(current).and_then(|node| node.next) {
            if self.get(next).is_some_and(|candidate| *candidate < value) {
                current = next;
            } else {
                break;
            }
        }
        self.insert_after(current, value);
    }

    /// Largest value in the list; the first one wins on ties. O(n).
    pub fn find_max(&self) -> Option<&T> {
        self.iter()
            .reduce(|max, candidate| if candidate > max { candidate } else { max })
    }

    /// Smallest value in the list; the first one wins on ties. O(n).
    pub fn find_min(&self) -> Option<&T> {
        self.iter()
            .reduce(|min, candidate| if candidate < min { candidate } else { min })
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Space-separated values from head to tail.
impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, value) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Each item is prepended, so the list ends up in reverse iteration order.
impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut list = Self::new();
        list.extend(items);
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
