use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error returned when popping from, or peeking at, a stack with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEmpty;

impl Display for StackEmpty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Stack is empty!")
    }
}

impl Error for StackEmpty {}
