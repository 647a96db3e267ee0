//! Capacity error types.

/// Rejection of an insert into a fixed-capacity container.
///
/// The container is left exactly as it was; the caller decides whether to
/// retry after making room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CapacityError {
    /// Enqueue on a full [`CircularArrayQueue`](crate::CircularArrayQueue).
    #[error("queue full: cannot add beyond limit of {limit}")]
    QueueFull { limit: usize },

    /// Push on a full [`ArrayStack`](crate::ArrayStack).
    #[error("stack full: cannot push beyond limit of {limit}")]
    StackFull { limit: usize },
}
