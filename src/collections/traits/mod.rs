//! Traits shared between several collection types, so that code (and tests) can be written once
//! over any of them.

#[cfg(feature = "stack")]
mod stack;

#[cfg(feature = "stack")]
pub use stack::*;
