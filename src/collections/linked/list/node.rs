use std::fmt::{self, Display, Formatter};
use std::mem;

/// An owning link to the next [`Node`] in a chain, or `None` at the end of it.
pub type Link<T> = Option<Box<Node<T>>>;

// NOTE: Nodes are boxed individually rather than allocated manually, because dereferencing a Box
// lets the value be moved straight back off of the heap when a node is unlinked.

/// A single element of a [`LinkedList`](super::LinkedList), holding a value and owning the rest of
/// the chain after it.
///
/// Nodes can be built and chained by hand, but are usually obtained from the list itself via
/// [`get_node`](super::LinkedList::get_node), [`append`](super::LinkedList::append) or
/// [`insert`](super::LinkedList::insert).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new Node holding `value`, without a next node.
    pub const fn new(value: T) -> Node<T> {
        Node {
            value,
            next: None,
        }
    }

    /// Returns a reference to the value held by this Node.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the value held by this Node.
    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the value held by this Node, returning the old one.
    pub const fn set_value(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }

    /// Returns the next Node in the chain, if there is one.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Returns the next Node in the chain mutably, if there is one.
    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// Replaces the link to the next Node, returning the previous link along with everything it
    /// owned.
    pub const fn set_next(&mut self, next: Link<T>) -> Link<T> {
        mem::replace(&mut self.next, next)
    }

    /// Detaches and returns the rest of the chain after this Node.
    pub const fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }

    /// Inserts a new Node holding `value` directly after this one, returning a reference to it. The
    /// previous next Node (if any) now follows the new one.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::linked::Node;
    /// let mut node = Node::new(1);
    /// node.insert_after(3);
    /// node.insert_after(2);
    /// assert_eq!(node.next().map(|n| *n.value()), Some(2));
    /// assert_eq!(node.next().and_then(|n| n.next()).map(|n| *n.value()), Some(3));
    /// ```
    pub fn insert_after(&mut self, value: T) -> &mut Node<T> {
        let next = self.next.take();
        self.next.insert(Box::new(Node { value, next }))
    }
}

impl<T: Display> Display for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
