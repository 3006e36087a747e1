//! Binary persistence for gym member records
//!
//! Encodes one [`Member`](shared::models::Member) per file in a
//! tag/length/value wire format and decodes it back. [`codec`] is the
//! in-memory byte codec, [`store`] the path-bound file store, [`wire`]
//! the framing primitives underneath both.

pub mod codec;
pub mod error;
pub mod store;
pub mod wire;

// Re-exports
pub use codec::{decode, encode};
pub use error::{Result, StoreError};
pub use store::MemberFile;
