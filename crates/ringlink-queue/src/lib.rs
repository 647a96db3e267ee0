//! # ringlink-queue: Queues and Stacks
//!
//! FIFO and LIFO containers in two flavours:
//!
//! - **Array-backed**: [`CircularArrayQueue`] keeps a fixed buffer of
//!   `limit + 1` slots and tells full from empty purely by index arithmetic;
//!   [`ArrayStack`] fills a fixed buffer bottom-up.
//! - **List-backed**: [`LinkedListQueue`] and [`LinkedListStack`] compose a
//!   [`DoublyLinkedList`](ringlink_list::DoublyLinkedList) and never run out
//!   of room.
//!
//! Both flavours implement the [`Queue`] and [`Stack`] traits so callers can
//! swap one for the other.
//!
//! # Ring buffer
//!
//! ```text
//!  size = limit + 1 = 4
//!
//!  ┌────┬────┬────┬────┐
//!  │    │ 20 │ 30 │    │      front == back             → empty
//!  └────┴────┴────┴────┘      front == (back + 1) % size → full
//!         ▲         ▲
//!       front      back
//! ```
//!
//! # Example
//!
//! ```
//! use ringlink_queue::{CapacityError, CircularArrayQueue};
//!
//! let mut queue = CircularArrayQueue::new();
//! queue.enqueue(10).unwrap();
//! queue.enqueue(20).unwrap();
//! queue.enqueue(30).unwrap();
//!
//! assert!(queue.is_full());
//! assert_eq!(queue.enqueue(40), Err(CapacityError::QueueFull { limit: 3 }));
//! assert_eq!(queue.dequeue(), Some(10));
//! ```

mod array_stack;
mod circular;
mod display;
mod error;
mod linked;
mod traits;

pub use array_stack::{ArrayStack, DEFAULT_STACK_LIMIT};
pub use circular::{CircularArrayQueue, DEFAULT_QUEUE_LIMIT};
pub use error::CapacityError;
pub use linked::{LinkedListQueue, LinkedListStack};
pub use traits::{Queue, Stack};
