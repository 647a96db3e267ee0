//! Unbounded queue and stack composed over [`DoublyLinkedList`].
//!
//! Both adapters insert at the head. The queue takes from the tail (FIFO);
//! the stack takes from the head (LIFO). Each owns its list exclusively.

use std::fmt::{self, Display};

use ringlink_list::{DoublyLinkedList, Iter};

use crate::{CapacityError, Queue, Stack};

/// FIFO queue: enqueue prepends, dequeue removes the tail.
#[derive(Debug, Clone)]
pub struct LinkedListQueue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> LinkedListQueue<T> {
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// O(1).
    pub fn enqueue(&mut self, value: T) {
        self.list.insert(value);
    }

    /// O(1).
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.remove_tail()
    }

    /// The oldest value, i.e. the one [`dequeue`](Self::dequeue) returns next.
    pub fn peek(&self) -> Option<&T> {
        self.list.iter().next_back()
    }

    pub fn is_empty(&self) -> bool {
        self.list.length() == 0
    }

    /// Values in list order: newest first, oldest last.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for LinkedListQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for LinkedListQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}

impl<T> Queue<T> for LinkedListQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), CapacityError> {
        LinkedListQueue::enqueue(self, value);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        LinkedListQueue::dequeue(self)
    }

    fn is_empty(&self) -> bool {
        LinkedListQueue::is_empty(self)
    }
}

/// LIFO stack: push and pop both work on the head.
#[derive(Debug, Clone)]
pub struct LinkedListStack<T> {
    list: DoublyLinkedList<T>,
}

impl<T> LinkedListStack<T> {
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// O(1).
    pub fn push(&mut self, value: T) {
        self.list.insert(value);
    }

    /// O(1).
    pub fn pop(&mut self) -> Option<T> {
        self.list.remove_head()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.list.length() == 0
    }

    /// Values from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for LinkedListStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for LinkedListStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}

impl<T> Stack<T> for LinkedListStack<T> {
    fn push(&mut self, value: T) -> Result<(), CapacityError> {
        LinkedListStack::push(self, value);
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        LinkedListStack::pop(self)
    }

    fn is_empty(&self) -> bool {
        LinkedListStack::is_empty(self)
    }
}
