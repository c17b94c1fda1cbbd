//! Policy document schema.
//!
//! A `PolicyConfig` is deserialized from TOML and declares the nodes of a
//! permission graph, their links, and the explicit decisions entities hold.
//! Declaration order does not matter for links: every node is created
//! before any link is resolved.

use serde::{Deserialize, Serialize};

/// An entity declaration.
///
/// ```toml
/// [[entities]]
/// id = "alice"
/// parents = ["admins", "editors"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpec {
    /// Unique within the document.
    pub id: String,

    /// Parent entity ids, in inheritance order.
    #[serde(default)]
    pub parents: Vec<String>,
}

/// A resource declaration.
///
/// ```toml
/// [[resources]]
/// id = "news"
/// parent = "website"
/// owners = ["alice"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Unique within the document. Also the key under the parent's
    /// sub-resource map.
    pub id: String,

    #[serde(default)]
    pub parent: Option<String>,

    /// Entity ids granted every action on this resource and its descendants.
    #[serde(default)]
    pub owners: Vec<String>,
}

/// Explicit decisions one entity holds on one resource.
///
/// Permissions are names (`"create"`, `"read"`, `"update"`, `"delete"`,
/// `"all"` or `"*"`). `deny` is applied after `allow`, so a permission
/// listed in both ends up denied.
///
/// ```toml
/// [[grants]]
/// entity = "moderators"
/// resource = "news"
/// allow = ["read", "create", "update"]
/// deny = ["delete"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantSpec {
    pub entity: String,
    pub resource: String,

    #[serde(default)]
    pub allow: Vec<String>,

    #[serde(default)]
    pub deny: Vec<String>,
}

/// The top-level structure deserialized from a TOML policy file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub entities: Vec<EntitySpec>,

    #[serde(default)]
    pub resources: Vec<ResourceSpec>,

    #[serde(default)]
    pub grants: Vec<GrantSpec>,
}
