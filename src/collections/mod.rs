//! The two linear containers, organized by backing strategy:
//! - `array_deque`: ring-buffer storage, grows by relinearization
//! - `doubly_linked_list`: slot arena with index links and a free list

pub mod array_deque;
pub mod doubly_linked_list;

pub use array_deque::ArrayDeque;
pub use doubly_linked_list::DoublyLinkedList;
