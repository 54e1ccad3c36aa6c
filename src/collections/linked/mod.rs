//! Linked collection types. Primarily revolves around [`LinkedList`], a singly linked list built on
//! a sentinel head, and the [`Node`]s it is made of.

pub mod list;

#[doc(inline)]
pub use list::{InvalidPosition, IntoIter, Iter, IterMut, LinkedList, Node};
