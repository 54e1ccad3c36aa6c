use std::cell::Cell;
use std::rc::Rc;

/// A value which counts how many times it, or any of its clones, has been dropped. Used to check
/// that containers release each of their elements exactly once.
#[derive(Debug, Clone, Default)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop::default()
    }

    /// Returns the number of drops counted so far and resets the count to 0.
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
