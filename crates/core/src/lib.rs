//! Shared primitives for the roster workspace.

pub mod error;
pub mod types;
