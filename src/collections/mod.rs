//! The linked collection types: a singly linked list, two stacks and a general tree.
//!
//! # Purpose
//! These are the structures that usually come first in a data structures course. Writing them
//! properly in Rust means deciding who owns each link, which is most of the work here.
//!
//! # Method
//! Positions, lengths and the top of a stack are all computed from the links themselves rather than
//! cached, so most of these types keep no state beyond their links.

#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "traits")]
pub mod traits;
#[cfg(feature = "tree")]
pub mod tree;
