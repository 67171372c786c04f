//! # `tandem` — linear container primitives
//!
//! Two independent, side-by-side linear containers with no shared code and
//! no runtime dependency between them:
//!
//! - [`ArrayDeque`]: a growable double-ended queue over a circular buffer.
//!   O(1) amortized push/pop at both ends; grows by relinearizing the ring
//!   into a `2n + 1` buffer.
//! - [`DoublyLinkedList`]: a doubly linked list over an index-addressed slot
//!   arena with a free list. O(1) end operations, indexed access that walks
//!   from whichever end is closer, forward and reverse iteration.
//!
//! Both are single-threaded, exclusively-owned structures: all mutation goes
//! through `&mut self`, so the borrow checker rules out concurrent mutation
//! and iterator invalidation instead of leaving them to runtime checks.
//!
//! ## Failure model
//!
//! Operations that can fail return typed errors from the [`error`] module
//! rather than panicking: end operations on an empty container return
//! [`error::Empty`], indexed operations return [`error::IndexOutOfRange`]
//! with the violated bound attached. Every mutating operation either
//! completes fully or fails before touching the structure.
//!
//! ## Example
//!
//! ```rust
//! use tandem::{ArrayDeque, DoublyLinkedList};
//!
//! let mut deque = ArrayDeque::with_capacity(3);
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//!
//! let mut list: DoublyLinkedList<i32> = (1..=3).collect();
//! list.insert(1, 10)?;
//! assert_eq!(list.to_string(), "[1, 10, 2, 3]");
//! assert_eq!(list.to_reverse_string(), "[3, 2, 10, 1]");
//! # Ok::<(), tandem::error::IndexOutOfRange>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod phonebook;

pub use collections::{ArrayDeque, DoublyLinkedList};
pub use error::{Empty, IndexBound, IndexOutOfRange};
