//! Fixed-capacity LIFO over a preallocated buffer.

use std::fmt::{self, Display};

use crate::display::write_spaced;
use crate::{CapacityError, Stack};

/// Limit used by [`ArrayStack::new`].
pub const DEFAULT_STACK_LIMIT: usize = 10;

/// Bounded stack that fills its buffer from index 0 upward.
///
/// Unlike the ring-buffer queue this keeps an explicit `size`: the top of
/// the stack is always `size - 1`, so no index arithmetic is needed.
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    buffer: Vec<Option<T>>,
    size: usize,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack holding at most [`DEFAULT_STACK_LIMIT`] values.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_STACK_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            buffer: std::iter::repeat_with(|| None).take(limit).collect(),
            size: 0,
        }
    }

    pub fn limit(&self) -> usize {
        self.buffer.len()
    }

    /// Pushes `value` on top. O(1).
    ///
    /// A full stack rejects the value and stays unchanged.
    pub fn push(&mut self, value: T) -> Result<(), CapacityError> {
        if self.is_full() {
            tracing::warn!(limit = self.limit(), "stack full, cannot push");
            return Err(CapacityError::StackFull {
                limit: self.limit(),
            });
        }

        self.buffer[self.size] = Some(value);
        self.size += 1;
        Ok(())
    }

    /// Pops the top value. O(1).
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.size -= 1;
        self.buffer[self.size].take()
    }

    pub fn peek(&self) -> Option<&T> {
        let top = self.size.checked_sub(1)?;
        self.buffer[top].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.limit()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Stacked values from bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.buffer[..self.size].iter().flatten()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, self.iter())
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) -> Result<(), CapacityError> {
        ArrayStack::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        ArrayStack::pop(self)
    }

    fn is_empty(&self) -> bool {
        ArrayStack::is_empty(self)
    }
}
