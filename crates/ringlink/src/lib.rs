//! # Ringlink
//!
//! In-memory, single-threaded sequence containers:
//!
//! - [`DoublyLinkedList`] - arena-backed list with head/tail tracking,
//!   ordered insert, in-place reversal and two-pointer middle search
//! - [`CircularArrayQueue`] - bounded FIFO over a `limit + 1` ring buffer
//! - [`ArrayStack`] - bounded LIFO over a fixed buffer
//! - [`LinkedListQueue`] / [`LinkedListStack`] - unbounded adapters over the list
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  ringlink                    │
//! │         (Containers, re-exports)             │
//! └───────┬──────────────────┬─────────────┬─────┘
//!         │                  │             │
//! ┌───────┴───────┐  ┌───────┴──────┐  ┌───┴─────────────┐
//! │ ringlink-queue│─►│ ringlink-list│  │ ringlink-config │
//! └───────────────┘  └──────────────┘  └─────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use ringlink::{Containers, Queue, RinglinkConfig};
//!
//! let containers = Containers::new(RinglinkConfig::default());
//!
//! let mut queue = containers.queue::<u32>();
//! queue.enqueue(10).unwrap();
//! queue.enqueue(20).unwrap();
//! assert_eq!(queue.dequeue(), Some(10));
//!
//! let mut list = ringlink::DoublyLinkedList::new();
//! for v in [5, 3, 1] {
//!     list.insert(v);
//! }
//! list.insert_ascending(4);
//! assert_eq!(list.to_string(), "1 3 4 5");
//! ```

mod containers;

pub use containers::Containers;

// Re-export the list
pub use ringlink_list::{DoublyLinkedList, Iter, NodeId};

// Re-export queues and stacks
pub use ringlink_queue::{
    ArrayStack, CapacityError, CircularArrayQueue, DEFAULT_QUEUE_LIMIT, DEFAULT_STACK_LIMIT,
    LinkedListQueue, LinkedListStack, Queue, Stack,
};

// Re-export configuration
pub use ringlink_config::{
    Backing, ConfigError, ConfigLoader, Paths, QueueConfig, RinglinkConfig, StackConfig,
};
