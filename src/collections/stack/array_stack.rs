use std::fmt::{self, Debug, Formatter};
use std::iter::Rev;
use std::slice;

use super::StackEmpty;
use crate::collections::traits::Stack;

/// The capacity hint used by [`ArrayStack::new`].
pub const DEFAULT_CAP: usize = 30;

/// A stack backed by a growable array, tracking the position of its top element explicitly.
///
/// The capacity given on creation is only a hint for the initial allocation; the stack grows as
/// needed and is never limited by it.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* If the underlying array doesn't have enough capacity for the new element, `push` will take
/// `O(n)` to grow it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArrayStack<T> {
    data: Vec<T>,
    // Always data.len() - 1, so -1 when the stack is empty.
    top: isize,
}

/// The slice-backed stack is the same container as [`ArrayStack`], kept under its own name.
pub type SliceStack<T> = ArrayStack<T>;

impl<T> ArrayStack<T> {
    /// Creates a new, empty ArrayStack with room for [`DEFAULT_CAP`] elements before it needs to
    /// grow.
    pub fn new() -> ArrayStack<T> {
        ArrayStack::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty ArrayStack with room for `cap` elements before it needs to grow.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::stack::ArrayStack;
    /// let mut stack = ArrayStack::with_cap(1);
    /// stack.push('a');
    /// stack.push('b');
    /// assert_eq!(stack.len(), 2);
    /// assert!(stack.cap() >= 2);
    /// ```
    pub fn with_cap(cap: usize) -> ArrayStack<T> {
        ArrayStack {
            data: Vec::with_capacity(cap),
            top: -1,
        }
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.top += 1;
    }

    /// Removes the top element and returns it, or [`StackEmpty`] if the stack has no elements.
    ///
    /// # Examples
    /// ```
    /// # use textbook_collections::collections::stack::{ArrayStack, StackEmpty};
    /// let mut stack: ArrayStack<_> = (1..=3).collect();
    /// assert_eq!(stack.pop(), Ok(3));
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert_eq!(stack.pop(), Err(StackEmpty));
    /// ```
    pub fn pop(&mut self) -> Result<T, StackEmpty> {
        if self.is_empty() {
            return Err(StackEmpty);
        }
        let value = self.data.pop().ok_or(StackEmpty)?;
        self.top -= 1;
        Ok(value)
    }

    /// Returns a reference to the top element, or [`StackEmpty`] if the stack has no elements.
    pub fn top(&self) -> Result<&T, StackEmpty> {
        self.top_index()
            .and_then(|index| self.data.get(index))
            .ok_or(StackEmpty)
    }

    /// Returns a mutable reference to the top element, or [`StackEmpty`] if the stack has no
    /// elements.
    pub fn top_mut(&mut self) -> Result<&mut T, StackEmpty> {
        self.top_index()
            .and_then(|index| self.data.get_mut(index))
            .ok_or(StackEmpty)
    }

    /// Returns true if the stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.top == -1
    }

    /// Returns the number of elements in the stack.
    pub const fn len(&self) -> usize {
        (self.top + 1) as usize
    }

    /// Returns the number of elements the stack can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.data.capacity()
    }

    /// Returns an iterator over the elements of the stack, from the top down.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.data.iter().rev()
    }

    const fn top_index(&self) -> Option<usize> {
        if self.top < 0 {
            None
        } else {
            Some(self.top as usize)
        }
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) {
        ArrayStack::push(self, value)
    }

    fn pop(&mut self) -> Result<T, StackEmpty> {
        ArrayStack::pop(self)
    }

    fn top(&self) -> Result<&T, StackEmpty> {
        ArrayStack::top(self)
    }

    fn top_mut(&mut self) -> Result<&mut T, StackEmpty> {
        ArrayStack::top_mut(self)
    }

    fn len(&self) -> usize {
        ArrayStack::len(self)
    }

    fn is_empty(&self) -> bool {
        ArrayStack::is_empty(self)
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    /// Pushes every item in order, so that the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = ArrayStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("data", &self.data)
            .field("top", &self.top)
            .field("cap", &self.cap())
            .finish()
    }
}
