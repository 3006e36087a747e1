//! Shared types for the gym membership system
//!
//! Data models, the prototype registry, and membership ID generation.
//! Binary persistence lives in the `member-store` crate.

pub mod models;
pub mod registry;
pub mod util;

// Re-exports
pub use models::{Clearance, Customer, Member, MemberKind, Staff, SubscriptionLevel};
pub use registry::MemberRegistry;
pub use util::{ClockSeededIds, IdSource};
