use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("root cannot have sibling")]
pub struct RootCannotHaveSibling;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cannot set a root to be another tree's sibling")]
pub struct CannotAttachRootAsSibling;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cannot set a root to be another tree's child")]
pub struct CannotAttachRootAsChild;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("tree cannot be root because it already has sibling")]
pub struct CannotDetachWithSiblings;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unsupported traversal method {code}")]
pub struct UnsupportedTraversalMethod {
    pub code: u8,
}

/// The ways in which linking two nodes as siblings can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum SiblingError {
    RootCannotHaveSibling(RootCannotHaveSibling),
    CannotAttachRootAsSibling(CannotAttachRootAsSibling),
}
