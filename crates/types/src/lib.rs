//! Core identifier types for the hierarchical naming registry.
//!
//! Node identifiers are fixed-width hashes derived from their parent and a
//! label hash, so addressing needs no central allocator; principals are
//! opaque authenticated caller identities supplied by the execution
//! substrate.

pub mod hexid;
pub mod node;
pub mod principal;

pub use hexid::{decode_id, encode_id, IdError, ID_BYTES, ID_STRING_LENGTH};
pub use node::{namehash, LabelHash, NodeId};
pub use principal::Principal;
