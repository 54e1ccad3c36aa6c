//! A module containing [`LinkedList`] and associated types.
//!
//! The other included types are [`Node`], which the list hands out from its positional methods,
//! and iterators providing owned and borrowed iteration over the list's elements.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod error;
mod iter;
mod linked_list;
mod node;
mod tests;

pub use error::*;
pub use iter::*;
pub use linked_list::*;
pub use node::*;
