use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub(crate) type NodeRc<T> = Rc<RefCell<TreeNode<T>>>;
pub(crate) type NodeWeak<T> = Weak<RefCell<TreeNode<T>>>;

// Owning links only ever point down (first_child) or right (next_sibling), so every node has
// exactly one owner inside the tree. The links pointing up and left are weak.
pub(crate) struct TreeNode<T> {
    pub value: T,
    pub parent: Option<NodeWeak<T>>,
    pub prev_sibling: Option<NodeWeak<T>>,
    pub next_sibling: Option<NodeRc<T>>,
    pub first_child: Option<NodeRc<T>>,
}

impl<T> TreeNode<T> {
    pub fn wrap(value: T, parent: Option<NodeWeak<T>>) -> NodeRc<T> {
        Rc::new(RefCell::new(TreeNode {
            value,
            parent,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
        }))
    }

    /// Links `next` directly after `prev` in both directions.
    ///
    /// Before: neither node is a root, `prev` has no next sibling and `next` has no previous
    /// sibling. After: `prev.next_sibling` owns `next` and `next.prev_sibling` refers back to
    /// `prev`.
    pub fn link_siblings(prev: &NodeRc<T>, next: &NodeRc<T>) {
        next.borrow_mut().prev_sibling = Some(Rc::downgrade(prev));
        prev.borrow_mut().next_sibling = Some(Rc::clone(next));
    }

    /// Follows next sibling links from `node` until the end of the chain.
    pub fn last_sibling(node: NodeRc<T>) -> NodeRc<T> {
        let mut curr = node;
        loop {
            let next = curr.borrow().next_sibling.clone();
            match next {
                Some(next) => curr = next,
                None => break curr,
            }
        }
    }
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        // Take apart every node this one solely owns without recursing, so that long sibling
        // chains and deep trees can't overflow the stack while dropping.
        let mut owned: Vec<NodeRc<T>> = Vec::new();
        owned.extend(self.first_child.take());
        owned.extend(self.next_sibling.take());

        while let Some(node) = owned.pop() {
            if let Ok(cell) = Rc::try_unwrap(node) {
                let mut node = cell.into_inner();
                owned.extend(node.first_child.take());
                owned.extend(node.next_sibling.take());
            }
        }
    }
}
