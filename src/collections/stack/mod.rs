//! Last-in-first-out collection types.
//!
//! There are two implementations with the same behaviour: [`ArrayStack`], which keeps its elements
//! in a growable array with an explicit top index, and [`LinkedListStack`], which delegates to a
//! [`LinkedList`](crate::collections::linked::LinkedList) and only ever touches its first
//! position. Both implement [`Stack`](crate::collections::traits::Stack).

mod array_stack;
mod error;
mod linked_stack;
mod tests;

pub use array_stack::*;
pub use error::*;
pub use linked_stack::*;
