//! A general tree of any arity, [`LinkedListTree`], stored as a left-child/right-sibling tree.
//!
//! Nodes are handed out as shared handles. The links from a node to its first child and to its
//! next sibling own the linked nodes, while the links back to its parent and previous sibling are
//! weak, so a tree never keeps itself alive through a cycle.

mod error;
mod iter;
mod linked_list_tree;
mod node;
mod traversal;

pub use error::*;
pub use iter::*;
pub use linked_list_tree::*;
pub(crate) use node::*;
pub use traversal::*;
