use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Index, IndexMut};

use super::{InvalidPosition, Iter, IterMut, Link, Node};
use crate::util::result::Throw;

/// A list with links in a single direction, starting from a permanent sentinel head.
///
/// All positions are 0-based and counted from the first real element, which is the element linked
/// to by the sentinel. The sentinel itself never holds a value and is never exposed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The position of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(n)` |
/// | `is_empty` | `O(1)` |
/// | `head` | `O(1)` |
/// | `tail` | `O(n)` |
/// | `get` | `O(i)` |
/// | `append` | `O(n)` |
/// | `insert` | `O(i)` |
/// | `delete` | `O(i)` |
/// | `find` | `O(n)` |
/// | `find_by_occurrence` | `O(n)` |
///
/// The length isn't cached anywhere, so `len` walks the entire list every time it is called.
pub struct LinkedList<T> {
    // The sentinel's next link. The sentinel never carries a value, so the link is all that's kept
    // of it.
    pub(crate) head: Link<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
        }
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(Node::value)
    }

    /// Returns a reference to the last element in the list, if it exists. This walks the entire
    /// list.
    pub fn tail(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements in the LinkedList, counting them one by one.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.len(), 0);
    /// list.append('a');
    /// list.append('b');
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns a reference to the element at `pos`, or an [`InvalidPosition`] if `pos >= len`.
    pub fn get(&self, pos: usize) -> Result<&T, InvalidPosition> {
        self.get_node(pos).map(Node::value)
    }

    /// Returns a mutable reference to the element at `pos`, or an [`InvalidPosition`] if
    /// `pos >= len`.
    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T, InvalidPosition> {
        self.get_node_mut(pos).map(Node::value_mut)
    }

    /// Returns the [`Node`] at `pos`, or an [`InvalidPosition`] if `pos >= len`.
    pub fn get_node(&self, pos: usize) -> Result<&Node<T>, InvalidPosition> {
        iter::successors(self.head.as_deref(), |node| node.next())
            .nth(pos)
            .ok_or(InvalidPosition { position: pos })
    }

    /// Returns the [`Node`] at `pos` mutably, or an [`InvalidPosition`] if `pos >= len`.
    pub fn get_node_mut(&mut self, pos: usize) -> Result<&mut Node<T>, InvalidPosition> {
        self.link_mut(pos)
            .and_then(|link| link.as_deref_mut())
            .ok_or(InvalidPosition { position: pos })
    }

    /// Adds `value` to the end of the list, returning the newly created [`Node`].
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// for i in 1..=5 {
    ///     list.append(i);
    /// }
    /// assert_eq!(list.to_string(), "[1 2 3 4 5]");
    /// ```
    pub fn append(&mut self, value: T) -> &mut Node<T> {
        self.tail_link_mut().insert(Box::new(Node::new(value)))
    }

    /// Inserts `value` so that it ends up at `pos`, moving the element previously there (and all
    /// that follow) back by one. Inserting at `pos == len` is the same as appending.
    ///
    /// Returns the newly created [`Node`], or an [`InvalidPosition`] if `pos > len`.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [1, 3].into_iter().collect();
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 4).unwrap();
    /// assert_eq!(list.to_string(), "[1 2 3 4]");
    /// assert!(list.insert(9, 9).is_err());
    /// ```
    pub fn insert(&mut self, pos: usize, value: T) -> Result<&mut Node<T>, InvalidPosition> {
        let link = self.link_mut(pos).ok_or(InvalidPosition { position: pos })?;
        let next = link.take();
        Ok(link.insert(Box::new(Node { value, next })))
    }

    /// Removes the element at `pos` and returns it, or an [`InvalidPosition`] if `pos >= len`.
    pub fn delete(&mut self, pos: usize) -> Result<T, InvalidPosition> {
        let link = self.link_mut(pos).ok_or(InvalidPosition { position: pos })?;
        let node = link.take().ok_or(InvalidPosition { position: pos })?;
        let Node { value, next } = *node;
        *link = next;
        Ok(value)
    }

    /// Returns the position of the first element that satisfies `predicate`.
    pub fn find<P: FnMut(&T) -> bool>(&self, predicate: P) -> Option<usize> {
        self.iter().position(predicate)
    }

    /// Returns the position of the `occurrence`-th element that satisfies `predicate`.
    ///
    /// A positive `occurrence` counts matches from the front, starting at 1, and resolves as soon
    /// as that many matches have been seen. A negative `occurrence` counts from the back, so `-1`
    /// is the last match and `-2` the one before it. An `occurrence` of 0, or one that reaches past
    /// the number of matches, resolves to `None`.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::linked::LinkedList;
    /// let list: LinkedList<_> = [1, 2, 3, 1, 1, 2, 3].into_iter().collect();
    /// assert_eq!(list.find_by_occurrence(|&v| v == 1, 2), Some(3));
    /// assert_eq!(list.find_by_occurrence(|&v| v == 1, -1), Some(4));
    /// assert_eq!(list.find_by_occurrence(|&v| v == 1, 5), None);
    /// ```
    pub fn find_by_occurrence<P: FnMut(&T) -> bool>(
        &self,
        mut predicate: P,
        occurrence: isize,
    ) -> Option<usize> {
        let mut matches = Vec::new();

        for (pos, value) in self.iter().enumerate() {
            if predicate(value) {
                matches.push(pos);
                if usize::try_from(occurrence) == Ok(matches.len()) {
                    return Some(pos);
                }
            }
        }

        if occurrence < 0 {
            return matches
                .len()
                .checked_sub(occurrence.unsigned_abs())
                .map(|index| matches[index]);
        }
        None
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> LinkedList<T> {
    /// Links a new node holding `value` directly after the sentinel, making it the first element.
    pub(crate) fn push_front(&mut self, value: T) -> &mut Node<T> {
        let next = self.head.take();
        self.head.insert(Box::new(Node { value, next }))
    }

    /// Walks `pos` steps from the sentinel, returning the link that holds the element at `pos`. The
    /// link is empty when `pos == len`, and no link is returned at all when `pos > len`.
    pub(crate) fn link_mut(&mut self, pos: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..pos {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// Returns the empty link after the last element.
    pub(crate) fn tail_link_mut(&mut self) -> &mut Link<T> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        link
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Only seek the tail once, then keep hold of the newest link.
        let mut link = self.tail_link_mut();
        for value in iter {
            link = &mut link.insert(Box::new(Node::new(value))).next;
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time, so that dropping a long list doesn't recurse through every
        // Box in the chain.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (pos, value) in self.iter().enumerate() {
            if pos > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
