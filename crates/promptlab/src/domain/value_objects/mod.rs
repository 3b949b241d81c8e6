//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod patch;

pub use patch::*;
