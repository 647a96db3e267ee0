//! Container traits.
//!
//! [`Queue`] and [`Stack`] abstract over the array-backed and list-backed
//! implementations so callers can pick a backing store without changing the
//! code that drives it.

use crate::CapacityError;

/// First-in, first-out container.
pub trait Queue<T> {
    /// Adds `value` at the back.
    ///
    /// Bounded implementations return [`CapacityError`] when full and leave
    /// the queue unchanged; unbounded ones always succeed.
    fn enqueue(&mut self, value: T) -> Result<(), CapacityError>;

    /// Removes and returns the front value, or `None` when empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns `true` if nothing is queued.
    fn is_empty(&self) -> bool;
}

/// Last-in, first-out container.
pub trait Stack<T> {
    /// Pushes `value` on top.
    ///
    /// Bounded implementations return [`CapacityError`] when full and leave
    /// the stack unchanged; unbounded ones always succeed.
    fn push(&mut self, value: T) -> Result<(), CapacityError>;

    /// Removes and returns the top value, or `None` when empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns `true` if nothing is stacked.
    fn is_empty(&self) -> bool;
}
