//! Stored decisions and resolution verdicts.
//!
//! A `Decision` is what an entity's permission table holds for one
//! (action, resource) cell. A `Verdict` is what the resolver returns for a
//! query, together with the node that decided it.

use serde::{Deserialize, Serialize};

use crate::key::{EntityKey, ResourceKey};

/// Tri-state cell of a permission table.
///
/// `Unset` means "no explicit decision" and lets resolution continue to the
/// wildcard, inherited entities and parent resources. `Deny` is an explicit
/// decision and stops the search along the entity that holds it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    #[default]
    Unset,
    Allow,
    Deny,
}

impl Decision {
    /// `Some(true)` for `Allow`, `Some(false)` for `Deny`, `None` for `Unset`.
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Decision::Unset => None,
            Decision::Allow => Some(true),
            Decision::Deny => Some(false),
        }
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, Decision::Unset)
    }
}

impl From<bool> for Decision {
    fn from(enabled: bool) -> Self {
        if enabled {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }
}

/// Which precedence step produced a grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantRule {
    /// The entity is listed among the resource's owners.
    Owner,
    /// The entity holds an explicit `Allow` for the requested action.
    Explicit,
    /// The entity holds an `Allow` for the `All` wildcard.
    Wildcard,
}

/// The node that granted a query.
///
/// `entity` and `resource` name the pair where the grant was found, which
/// may be an ancestor of the queried entity, an ancestor of the queried
/// resource, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub rule: GrantRule,
    pub entity: EntityKey,
    pub resource: ResourceKey,
}

/// Why a query was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The queried entity holds an explicit `Deny` on the queried resource.
    ExplicitDeny,
    /// Nothing along any entity or resource path granted the action.
    NoGrant,
}

/// The result of resolving one (entity, resource, action) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Allow { grant: Grant },
    Deny { reason: DenyReason },
}

impl Verdict {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow { .. })
    }

    /// The grant that allowed the query, if any.
    pub fn grant(&self) -> Option<&Grant> {
        match self {
            Verdict::Allow { grant } => Some(grant),
            Verdict::Deny { .. } => None,
        }
    }
}
