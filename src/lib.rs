//! Linked sequence containers.
//!
//! - [`SinglyLinkedList`]: head-only chain of boxed nodes.
//! - [`DoublyLinkedList`]: sentinel-bounded chain, O(1) at both ends.
//! - [`Deque`]: doubly linked, optionally bounded, indexable, rotatable.
//! - [`Stack`] and [`Queue`]: LIFO/FIFO adapters over the two lists.
//!
//! The doubly linked forms keep their nodes in an index arena; node views
//! returned by `head`/`tail` borrow the container, so they cannot outlive a
//! mutation.

mod chain;
pub mod deep_clone;
pub mod deque;
pub mod doubly_linked_list;
pub mod error;
pub mod queue;
pub mod singly_linked_list;
pub mod stack;

pub use chain::{IntoIter, Iter, IterMut, Node};
pub use deep_clone::DeepClone;
pub use deque::Deque;
pub use doubly_linked_list::DoublyLinkedList;
pub use error::{Error, Result};
pub use queue::Queue;
pub use singly_linked_list::SinglyLinkedList;
pub use stack::Stack;
