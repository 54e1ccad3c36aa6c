use std::fmt::{self, Debug, Display, Formatter};

use super::StackEmpty;
use crate::collections::linked::{Iter, LinkedList};
use crate::collections::traits::Stack;

/// A stack backed by a [`LinkedList`], where the first position of the list is always the top of
/// the stack.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
/// | `len` | `O(n)` |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LinkedListStack<T> {
    list: LinkedList<T>,
}

impl<T> LinkedListStack<T> {
    /// Creates a new, empty LinkedListStack.
    pub const fn new() -> LinkedListStack<T> {
        LinkedListStack {
            list: LinkedList::new(),
        }
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes the top element and returns it, or [`StackEmpty`] if the stack has no elements.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::stack::{LinkedListStack, StackEmpty};
    /// let mut stack = LinkedListStack::new();
    /// assert_eq!(stack.pop(), Err(StackEmpty));
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// ```
    pub fn pop(&mut self) -> Result<T, StackEmpty> {
        self.list.delete(0).map_err(|_| StackEmpty)
    }

    /// Returns a reference to the top element, or [`StackEmpty`] if the stack has no elements.
    pub fn top(&self) -> Result<&T, StackEmpty> {
        self.list.get(0).map_err(|_| StackEmpty)
    }

    /// Returns a mutable reference to the top element, or [`StackEmpty`] if the stack has no
    /// elements.
    pub fn top_mut(&mut self) -> Result<&mut T, StackEmpty> {
        self.list.get_mut(0).map_err(|_| StackEmpty)
    }

    /// Returns true if the stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of elements in the stack. Like the list it wraps, this counts every
    /// element.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns an iterator over the elements of the stack, from the top down.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for LinkedListStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for LinkedListStack<T> {
    fn push(&mut self, value: T) {
        LinkedListStack::push(self, value)
    }

    fn pop(&mut self) -> Result<T, StackEmpty> {
        LinkedListStack::pop(self)
    }

    fn top(&self) -> Result<&T, StackEmpty> {
        LinkedListStack::top(self)
    }

    fn top_mut(&mut self) -> Result<&mut T, StackEmpty> {
        LinkedListStack::top_mut(self)
    }

    fn len(&self) -> usize {
        LinkedListStack::len(self)
    }

    fn is_empty(&self) -> bool {
        LinkedListStack::is_empty(self)
    }
}

impl<T> FromIterator<T> for LinkedListStack<T> {
    /// Pushes every item in order, so that the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedListStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for LinkedListStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Debug> Debug for LinkedListStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedListStack")
            .field("list", &self.list)
            .finish()
    }
}

impl<T: Display> Display for LinkedListStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
