//! This crate is a set of the classic linked data structures, written out by hand.
//!
//! # Purpose
//! Each of the types here is one that gets drawn on a whiteboard in an introductory course: a
//! linked list with a sentinel head, a stack (twice, once over a growable array and once over the
//! list) and a general tree stored as first-child/next-sibling links. None of them are meant to
//! replace [`std::collections`], they exist to show how the links fit together.
//!
//! # Method
//! Ownership decides the layout of every type. The list owns each node through the link before it,
//! so it is built from [`Box`]es. Tree nodes are shared between handles and walked in every
//! direction, so they live behind [`Rc`](std::rc::Rc)s, with the links pointing up and left being
//! [`Weak`](std::rc::Weak) to keep a tree from owning itself.
//!
//! Long lists and wide or deep trees are dropped iteratively, so that the size of a structure is
//! never limited by the stack.
//!
//! # Error Handling
//! Every operation that can fail for a reason the caller controls (an invalid position, an empty
//! stack, a root being linked as a sibling) returns a [`Result`]. The errors are small structs
//! (usually ZSTs) that implement [`Error`](std::error::Error), grouped into enums where a method
//! can fail in more than one way. Searches that come up empty return [`None`] rather than an error.
//!
//! Indexing a [`LinkedList`](collections::linked::LinkedList) with `[]` panics on an invalid
//! position, with the same message the error would carry.
//!
//! # Dependencies
//! This crate depends on `derive_more` for the repetitive parts of its error types. Each collection
//! is behind a cargo feature, all of which are enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
