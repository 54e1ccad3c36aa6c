use derive_more::{Display, IsVariant};

use super::UnsupportedTraversalMethod;

/// The order in which [`LinkedListTree::traverse`](super::LinkedListTree::traverse) visits nodes.
///
/// Both orders are depth-first and visit siblings from left to right; they only differ in whether
/// a node is visited before or after its children.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
#[repr(u8)]
pub enum Traversal {
    /// Visit a node, then its children, then its next sibling.
    #[display("pre-order")]
    PreOrder = 0,
    /// Visit a node's children, then the node, then its next sibling.
    #[display("post-order")]
    PostOrder = 1,
}

impl TryFrom<u8> for Traversal {
    type Error = UnsupportedTraversalMethod;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Traversal::PreOrder),
            1 => Ok(Traversal::PostOrder),
            code => Err(UnsupportedTraversalMethod { code }),
        }
    }
}

impl From<Traversal> for u8 {
    fn from(value: Traversal) -> Self {
        value as u8
    }
}
