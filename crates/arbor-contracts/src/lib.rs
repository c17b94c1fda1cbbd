//! # arbor-contracts
//!
//! Shared types for the arbor permission engine.
//!
//! All crates in the workspace import from here. No resolution logic lives
//! in this crate, only the action vocabulary, arena keys, decision and
//! verdict types, and the error type.

pub mod decision;
pub mod error;
pub mod key;
pub mod permission;

pub use decision::{Decision, DenyReason, Grant, GrantRule, Verdict};
pub use error::{ArborError, ArborResult};
pub use key::{EntityKey, ResourceKey};
pub use permission::Permission;
