//! Data models
//!
//! Member records shared between the registry and the store layer.

pub mod member;

// Re-exports
pub use member::*;
