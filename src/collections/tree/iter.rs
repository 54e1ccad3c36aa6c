use std::iter::FusedIterator;

use super::{LinkedListTree, NodeRc};

/// An iterator over handles to the children of a node, from first to last. Created by
/// [`LinkedListTree::children`].
pub struct Children<T> {
    pub(crate) next: Option<NodeRc<T>>,
}

impl<T> Iterator for Children<T> {
    type Item = LinkedListTree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.borrow().next_sibling.clone();
        Some(LinkedListTree { node })
    }
}

impl<T> FusedIterator for Children<T> {}
