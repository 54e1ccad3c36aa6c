use crate::collections::stack::StackEmpty;

/// A last-in-first-out container. Every method only ever deals with the top of the stack.
///
/// Implemented by both [`ArrayStack`](crate::collections::stack::ArrayStack) and
/// [`LinkedListStack`](crate::collections::stack::LinkedListStack), which offer the same methods
/// inherently.
pub trait Stack<T> {
    /// Adds `value` to the top of the stack.
    fn push(&mut self, value: T);

    /// Removes the top element from the stack and returns it, or [`StackEmpty`] if there is
    /// nothing to remove.
    fn pop(&mut self) -> Result<T, StackEmpty>;

    /// Returns a reference to the top element without removing it, or [`StackEmpty`].
    fn top(&self) -> Result<&T, StackEmpty>;

    /// Returns a mutable reference to the top element without removing it, or [`StackEmpty`].
    fn top_mut(&mut self) -> Result<&mut T, StackEmpty>;

    /// Returns the number of elements in the stack.
    fn len(&self) -> usize;

    /// Returns true if the stack contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pops every element off of the stack, returning them in the order they were removed.
    fn drain_top(&mut self) -> Vec<T> {
        let mut drained = Vec::with_capacity(self.len());
        while let Ok(value) = self.pop() {
            drained.push(value);
        }
        drained
    }
}
