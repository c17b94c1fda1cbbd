//! Arena handles for graph nodes.
//!
//! Entities and resources live in the `AccessControl` arena and are
//! addressed by these copyable keys. Two nodes with the same string id are
//! still distinct keys: identity is the key, never the name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to an entity (user, group, role) in an `AccessControl` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityKey(pub usize);

/// Handle to a resource in an `AccessControl` arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceKey(pub usize);

impl EntityKey {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl ResourceKey {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource#{}", self.0)
    }
}
