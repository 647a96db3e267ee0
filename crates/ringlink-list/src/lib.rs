//! # ringlink-list: Doubly Linked List
//!
//! A doubly linked list whose nodes live in an arena and link to each other
//! through stable [`NodeId`]s instead of pointers. The list exclusively owns
//! its nodes; a removed node's slot is emptied and recycled through a
//! free-list, so no stale `prev`/`next` links outlive the node.
//!
//! # Layout
//!
//! ```text
//!   head                                   tail
//!    │                                      │
//!    ▼                                      ▼
//! ┌──────┐  next  ┌──────┐  next  ┌──────┐
//! │  1   │ ─────► │  3   │ ─────► │  5   │ ──► None
//! │      │ ◄───── │      │ ◄───── │      │
//! └──────┘  prev  └──────┘  prev  └──────┘
//!    ▲
//!    └── prev = None
//! ```
//!
//! # Invariants
//!
//! - `head` is `None` if and only if `tail` is `None`.
//! - `head.prev` and `tail.next` are always `None`.
//! - Walking `next` from `head` reaches `tail` in `length() - 1` steps, and
//!   walking `prev` from `tail` reaches `head` symmetrically.
//!
//! # Example
//!
//! ```
//! use ringlink_list::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.insert(5);
//! list.insert(3);
//! list.insert(1);
//! list.insert_ascending(4);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5]);
//! assert_eq!(list.find_middle_value(), Some(&4));
//! assert_eq!(list.find_nth_from_end(0), Some(&5));
//! ```

mod iter;
mod list;
mod node;

pub use iter::Iter;
pub use list::DoublyLinkedList;
pub use node::NodeId;
