use std::cell::{Ref, RefMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::rc::{Rc, Weak};

use super::{
    CannotAttachRootAsChild, CannotAttachRootAsSibling, CannotDetachWithSiblings, Children,
    NodeRc, NodeWeak, RootCannotHaveSibling, SiblingError, Traversal, TreeNode,
    UnsupportedTraversalMethod,
};

/// A handle to a node in a general tree, stored as a left-child/right-sibling tree: each node
/// links to its first child and to its next sibling, rather than keeping a list of children.
///
/// A node is a root exactly when it has no parent. Roots can never have siblings and can never be
/// attached as another node's child; every method that links nodes together checks this.
///
/// Handles are cheap to clone and all clones refer to the same node, so handles compare equal only
/// when they refer to the same node. A node stays alive while it is reachable from a live node's
/// first child or next sibling link, or while any handle to it exists.
///
/// # Methods
/// There are two layers of methods that modify links:
/// - The setters ([`set_parent`](Self::set_parent), [`set_prev_sibling`](Self::set_prev_sibling),
///   [`set_next_sibling`](Self::set_next_sibling) and [`set_first_child`](Self::set_first_child))
///   only update the link on the node they are called on, and never the opposite end of it. Using
///   them correctly is up to the caller.
/// - [`append_child`](Self::append_child), [`append_sibling`](Self::append_sibling) and
///   [`delete`](Self::delete) update both ends of every link they touch.
///
/// # Examples
/// ```
/// # use textbook_collections::collections::tree::{LinkedListTree, Traversal};
/// let root = LinkedListTree::new(1);
/// let child = root.append_child(2);
/// child.append_child(4);
/// root.append_child(3);
///
/// let mut visited = Vec::new();
/// root.traverse(Traversal::PreOrder, |value, depth| visited.push((*value, depth)));
/// assert_eq!(visited, [(1, 0), (2, 1), (4, 2), (3, 1)]);
/// ```
pub struct LinkedListTree<T> {
    pub(crate) node: NodeRc<T>,
}

impl<T> LinkedListTree<T> {
    /// Creates a new root holding `value`.
    pub fn new(value: T) -> LinkedListTree<T> {
        LinkedListTree {
            node: TreeNode::wrap(value, None),
        }
    }

    /// Creates a new node holding `value`, with `parent` as its parent.
    ///
    /// The new node isn't added to `parent`'s children; use [`append_child`](Self::append_child)
    /// to create a node that is.
    pub fn new_node(value: T, parent: &LinkedListTree<T>) -> LinkedListTree<T> {
        LinkedListTree {
            node: TreeNode::wrap(value, Some(Rc::downgrade(&parent.node))),
        }
    }

    /// Returns a reference to the value held by this node.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed mutably.
    pub fn value(&self) -> Ref<'_, T> {
        Ref::map(self.node.borrow(), |node| &node.value)
    }

    /// Returns a mutable reference to the value held by this node.
    ///
    /// # Panics
    /// Panics if the node is currently borrowed, including during a traversal.
    pub fn value_mut(&self) -> RefMut<'_, T> {
        RefMut::map(self.node.borrow_mut(), |node| &mut node.value)
    }

    /// Replaces the value held by this node, returning the old one.
    ///
    /// # Panics
    /// Panics if the node is currently borrowed, including during a traversal.
    pub fn set_value(&self, value: T) -> T {
        mem::replace(&mut self.node.borrow_mut().value, value)
    }

    /// Sets the parent of this node, or makes it a root when `parent` is `None`.
    ///
    /// A node that still has a next sibling can't become a root, so clearing the parent fails with
    /// [`CannotDetachWithSiblings`] in that case. Otherwise the parent is set as is, without adding
    /// this node to the new parent's children.
    pub fn set_parent(
        &self,
        parent: Option<&LinkedListTree<T>>,
    ) -> Result<(), CannotDetachWithSiblings> {
        let mut node = self.node.borrow_mut();
        if parent.is_none() && node.next_sibling.is_some() {
            return Err(CannotDetachWithSiblings);
        }
        node.parent = parent.map(|parent| Rc::downgrade(&parent.node));
        Ok(())
    }

    /// Returns the parent of this node, if it has one that is still alive.
    pub fn parent(&self) -> Option<LinkedListTree<T>> {
        upgrade(self.node.borrow().parent.as_ref())
    }

    /// Returns true if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.node.borrow().parent.is_none()
    }

    /// Creates a new node holding `value` and adds it to the end of this node's sibling chain,
    /// sharing this node's parent.
    ///
    /// Fails with [`RootCannotHaveSibling`] if this node is a root.
    pub fn append_sibling(&self, value: T) -> Result<LinkedListTree<T>, RootCannotHaveSibling> {
        let parent = {
            let node = self.node.borrow();
            node.parent.clone().ok_or(RootCannotHaveSibling)?
        };

        let sibling = TreeNode::wrap(value, Some(parent));
        TreeNode::link_siblings(&TreeNode::last_sibling(Rc::clone(&self.node)), &sibling);

        Ok(LinkedListTree { node: sibling })
    }

    /// Creates a new node holding `value` and adds it as the last child of this node.
    pub fn append_child(&self, value: T) -> LinkedListTree<T> {
        let child = TreeNode::wrap(value, Some(Rc::downgrade(&self.node)));

        let first_child = self.node.borrow().first_child.clone();
        match first_child {
            Some(first_child) => {
                TreeNode::link_siblings(&TreeNode::last_sibling(first_child), &child);
            },
            None => self.node.borrow_mut().first_child = Some(Rc::clone(&child)),
        }

        LinkedListTree { node: child }
    }

    /// Sets the previous sibling of this node, without updating `sibling` itself.
    ///
    /// `None` is always accepted. Otherwise, this fails with
    /// [`RootCannotHaveSibling`](SiblingError::RootCannotHaveSibling) if this node is a root, or
    /// [`CannotAttachRootAsSibling`](SiblingError::CannotAttachRootAsSibling) if `sibling` is.
    pub fn set_prev_sibling(
        &self,
        sibling: Option<&LinkedListTree<T>>,
    ) -> Result<(), SiblingError> {
        if let Some(sibling) = sibling {
            self.check_sibling(sibling)?;
        }
        self.node.borrow_mut().prev_sibling = sibling.map(|sibling| Rc::downgrade(&sibling.node));
        Ok(())
    }

    /// Returns the previous sibling of this node, if it has one that is still alive.
    pub fn prev_sibling(&self) -> Option<LinkedListTree<T>> {
        upgrade(self.node.borrow().prev_sibling.as_ref())
    }

    /// Sets the next sibling of this node, without updating `sibling` itself. This node takes
    /// ownership of `sibling` (and everything after it), so linking a node after itself, directly
    /// or further down its chain, will leak the chain.
    ///
    /// `None` is always accepted. Otherwise, this fails with
    /// [`RootCannotHaveSibling`](SiblingError::RootCannotHaveSibling) if this node is a root, or
    /// [`CannotAttachRootAsSibling`](SiblingError::CannotAttachRootAsSibling) if `sibling` is.
    pub fn set_next_sibling(
        &self,
        sibling: Option<&LinkedListTree<T>>,
    ) -> Result<(), SiblingError> {
        if let Some(sibling) = sibling {
            self.check_sibling(sibling)?;
        }
        self.node.borrow_mut().next_sibling = sibling.map(|sibling| Rc::clone(&sibling.node));
        Ok(())
    }

    /// Returns the next sibling of this node.
    pub fn next_sibling(&self) -> Option<LinkedListTree<T>> {
        self.node.borrow().next_sibling.clone().map(|node| LinkedListTree { node })
    }

    /// Sets the first child of this node, without updating `child` itself.
    ///
    /// `None` is always accepted. Otherwise, this fails with [`CannotAttachRootAsChild`] if `child`
    /// is a root.
    pub fn set_first_child(
        &self,
        child: Option<&LinkedListTree<T>>,
    ) -> Result<(), CannotAttachRootAsChild> {
        if child.is_some_and(LinkedListTree::is_root) {
            return Err(CannotAttachRootAsChild);
        }
        self.node.borrow_mut().first_child = child.map(|child| Rc::clone(&child.node));
        Ok(())
    }

    /// Returns the first child of this node.
    pub fn first_child(&self) -> Option<LinkedListTree<T>> {
        self.node.borrow().first_child.clone().map(|node| LinkedListTree { node })
    }

    /// Returns an iterator over the children of this node, from first to last.
    pub fn children(&self) -> Children<T> {
        Children {
            next: self.node.borrow().first_child.clone(),
        }
    }

    /// Visits this node, all of its descendants, and all of the siblings after it along with their
    /// descendants, calling `visit` with each value and its depth relative to this node.
    ///
    /// This node and its siblings are at depth 0, their children at depth 1 and so on. Called on a
    /// root, this visits the whole tree.
    ///
    /// # Panics
    /// Panics if `visit` tries to mutably borrow any node while it is being visited.
    pub fn traverse<F: FnMut(&T, usize)>(&self, method: Traversal, mut visit: F) {
        let start = Some(Rc::clone(&self.node));
        match method {
            Traversal::PreOrder => pre_order(start, 0, &mut visit),
            Traversal::PostOrder => post_order(start, 0, &mut visit),
        }
    }

    /// The same as [`traverse`](Self::traverse), but taking the method as a raw code (see
    /// [`Traversal`]'s discriminants). Fails with [`UnsupportedTraversalMethod`] for any other
    /// code, without visiting anything.
    pub fn traverse_by_code<F: FnMut(&T, usize)>(
        &self,
        code: u8,
        visit: F,
    ) -> Result<(), UnsupportedTraversalMethod> {
        self.traverse(Traversal::try_from(code)?, visit);
        Ok(())
    }

    /// Removes this node from the tree, by unlinking it from its parent (if it is the first child)
    /// or from its previous sibling. The next sibling takes this node's place. Does nothing if this
    /// node is a root.
    ///
    /// Only the links pointing at this node are changed; this node keeps its own parent, siblings
    /// and children. A handle to it still reaches its subtree, which is otherwise detached from the
    /// tree, but also its former next sibling and everything after it, which are still in the
    /// tree. Those siblings are owned by both until the handle is dropped, and traversing or
    /// appending a sibling from the handle will reach into the live tree.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::tree::LinkedListTree;
    /// let root = LinkedListTree::new(1);
    /// let first = root.append_child(2);
    /// let second = root.append_child(3);
    /// first.append_child(4);
    ///
    /// first.delete();
    /// assert_eq!(root.first_child(), Some(second));
    /// assert_eq!(first.first_child().map(|c| *c.value()), Some(4));
    /// ```
    pub fn delete(&self) {
        let (parent, prev, next) = {
            let node = self.node.borrow();
            match &node.parent {
                None => return,
                Some(parent) => (
                    parent.upgrade(),
                    node.prev_sibling.as_ref().map(Weak::upgrade),
                    node.next_sibling.clone(),
                ),
            }
        };

        match prev {
            // First child, so the parent owns this node directly.
            None => {
                if let Some(parent) = parent {
                    let mut parent = parent.borrow_mut();
                    if is_node(parent.first_child.as_ref(), &self.node) {
                        parent.first_child = next.clone();
                    }
                }
            },
            Some(Some(prev)) => {
                let mut prev_node = prev.borrow_mut();
                if is_node(prev_node.next_sibling.as_ref(), &self.node) {
                    prev_node.next_sibling = next.clone();
                }
            },
            // The previous sibling has already been dropped, so nothing owns this node anymore.
            Some(None) => {},
        }

        if let Some(next) = next {
            next.borrow_mut().prev_sibling = self.node.borrow().prev_sibling.clone();
        }
    }

    /// Returns true if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &LinkedListTree<T>) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    fn check_sibling(&self, sibling: &LinkedListTree<T>) -> Result<(), SiblingError> {
        if self.is_root() {
            return Err(RootCannotHaveSibling.into());
        }
        if sibling.is_root() {
            return Err(CannotAttachRootAsSibling.into());
        }
        Ok(())
    }
}

fn upgrade<T>(link: Option<&NodeWeak<T>>) -> Option<LinkedListTree<T>> {
    link.and_then(Weak::upgrade).map(|node| LinkedListTree { node })
}

fn is_node<T>(link: Option<&NodeRc<T>>, node: &NodeRc<T>) -> bool {
    link.is_some_and(|link| Rc::ptr_eq(link, node))
}

// Recursion only goes as deep as the tree does; siblings are walked in a loop.
fn pre_order<T, F: FnMut(&T, usize)>(start: Option<NodeRc<T>>, depth: usize, visit: &mut F) {
    let mut curr = start;
    while let Some(node) = curr {
        let (first_child, next_sibling) = {
            let node = node.borrow();
            visit(&node.value, depth);
            (node.first_child.clone(), node.next_sibling.clone())
        };
        pre_order(first_child, depth + 1, visit);
        curr = next_sibling;
    }
}

fn post_order<T, F: FnMut(&T, usize)>(start: Option<NodeRc<T>>, depth: usize, visit: &mut F) {
    let mut curr = start;
    while let Some(node) = curr {
        let first_child = node.borrow().first_child.clone();
        post_order(first_child, depth + 1, visit);

        let node = node.borrow();
        visit(&node.value, depth);
        curr = node.next_sibling.clone();
    }
}

impl<T> Clone for LinkedListTree<T> {
    fn clone(&self) -> Self {
        LinkedListTree {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T> PartialEq for LinkedListTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for LinkedListTree<T> {}

impl<T: Debug> Debug for LinkedListTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.node.try_borrow() {
            Ok(node) => f
                .debug_struct("LinkedListTree")
                .field("value", &node.value)
                .field("is_root", &node.parent.is_none())
                .finish(),
            Err(_) => f.debug_struct("LinkedListTree").finish_non_exhaustive(),
        }
    }
}

impl<T: Display> Display for LinkedListTree<T> {
    /// Writes the values reached by a pre-order traversal, one per line, indented by four spaces
    /// per level of depth.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.traverse(Traversal::PreOrder, |value, depth| {
            if result.is_ok() {
                result = writeln!(f, "{:indent$}{value}", "", indent = depth * 4);
            }
        });
        result
    }
}
