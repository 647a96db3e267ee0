//! Fixed-capacity FIFO over a circular buffer.
//!
//! The buffer holds `limit + 1` slots. One slot is always left unused so
//! that `front == back` can only mean empty and
//! `front == (back + 1) % size` can only mean full, with no element
//! counter kept alongside the two indices.

use std::fmt::{self, Display};

use crate::display::write_spaced;
use crate::{CapacityError, Queue};

/// Limit used by [`CircularArrayQueue::new`].
pub const DEFAULT_QUEUE_LIMIT: usize = 3;

/// Bounded FIFO queue backed by a ring buffer.
#[derive(Debug, Clone)]
pub struct CircularArrayQueue<T> {
    /// `limit + 1` slots; occupied slots run from `front` up to `back`.
    buffer: Vec<Option<T>>,
    /// Slot of the next value to dequeue.
    front: usize,
    /// Slot the next enqueued value is written to.
    back: usize,
}

impl<T> CircularArrayQueue<T> {
    /// Creates an empty queue holding at most [`DEFAULT_QUEUE_LIMIT`] values.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_QUEUE_LIMIT)
    }

    /// Creates an empty queue holding at most `limit` values.
    ///
    /// A limit of zero yields a queue that is both empty and full.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is `usize::MAX`, since the buffer needs one slot
    /// beyond the limit.
    pub fn with_limit(limit: usize) -> Self {
        assert!(limit < usize::MAX, "queue limit leaves no room for the spare slot");
        Self {
            buffer: std::iter::repeat_with(|| None).take(limit + 1).collect(),
            front: 0,
            back: 0,
        }
    }

    /// Maximum number of values the queue accepts.
    pub fn limit(&self) -> usize {
        self.size() - 1
    }

    fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Stores `value` at `back` and advances `back`. O(1).
    ///
    /// A full queue rejects the value and stays unchanged.
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityError> {
        if self.is_full() {
            tracing::warn!(limit = self.limit(), "queue full, cannot add");
            return Err(CapacityError::QueueFull {
                limit: self.limit(),
            });
        }

        self.buffer[self.back] = Some(value);
        self.back = (self.back + 1) % self.size();
        Ok(())
    }

    /// Takes the value at `front` and advances `front`. O(1).
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.buffer[self.front].take();
        self.front = (self.front + 1) % self.size();
        value
    }

    /// The value [`dequeue`](Self::dequeue) would return next.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.front].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }

    pub fn is_full(&self) -> bool {
        self.front == (self.back + 1) % self.size()
    }

    /// Number of queued values, derived from the two indices.
    pub fn len(&self) -> usize {
        (self.back + self.size() - self.front) % self.size()
    }

    /// Queued values from front to back, following the wrap-around.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        (0..self.len()).filter_map(move |offset| {
            self.buffer[(self.front + offset) % self.size()].as_ref()
        })
    }
}

impl<T> Default for CircularArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for CircularArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, self.iter())
    }
}

impl<T> Queue<T> for CircularArrayQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), CapacityError> {
        CircularArrayQueue::enqueue(self, value)
    }

    fn dequeue(&mut self) -> Option<T> {
        CircularArrayQueue::dequeue(self)
    }

    fn is_empty(&self) -> bool {
        CircularArrayQueue::is_empty(self)
    }
}
