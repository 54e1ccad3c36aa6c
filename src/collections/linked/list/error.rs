use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error returned when a [`LinkedList`](super::LinkedList) is accessed or modified at a
/// position that doesn't exist in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPosition {
    pub position: usize,
}

impl Display for InvalidPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid position {} for linked list!", self.position)
    }
}

impl Error for InvalidPosition {}
