//! # arbor-core
//!
//! The permission graph and its resolver.
//!
//! This crate provides:
//! - `Entity` and `Resource`, the two kinds of graph node
//! - `AccessControl`, the arena that owns every node and keeps links
//!   consistent in both directions
//! - the `Authorizer` trait and its implementation on `AccessControl`,
//!   which resolves (entity, resource, action) queries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use arbor_contracts::Permission;
//! use arbor_core::{AccessControl, Authorizer};
//!
//! let mut ac = AccessControl::new();
//! let groups = ac.create_entity("groups");
//! let admins = ac.create_child(groups, "admins");
//! let alice = ac.create_child(admins, "alice");
//! let site = ac.create_resource("website");
//! let news = ac.create_sub(site, "news");
//!
//! ac.allow(admins, site, Permission::All);
//! assert!(ac.can_delete(alice, news));
//! ```

pub mod access;
pub mod entity;
mod resolver;
pub mod resource;
pub mod traits;

pub use access::AccessControl;
pub use entity::Entity;
pub use resource::Resource;
pub use traits::Authorizer;
