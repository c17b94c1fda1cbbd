//! Permission resolution over the `AccessControl` graph.
//!
//! Resolution algorithm for a query (entity, resource, action), evaluated in
//! order and stopping at the first grant:
//!
//! 1. The entity owns the resource → allow.
//! 2. The entity holds an explicit decision for `action` on the resource →
//!    return it. A `Deny` here stops this entity's own search.
//! 3. The entity holds `All = Allow` on the resource → allow. `All = Deny`
//!    is not binding and falls through.
//! 4. Each parent entity, in insertion order, is queried for the same
//!    resource and action → allow on the first grant.
//! 5. The parent resource, if any, is queried for the same entity and
//!    action → allow on a grant.
//! 6. Otherwise deny.
//!
//! Steps 4 and 5 are alternative paths, not merged views: a deny recorded
//! on one entity never blocks a grant found along another path.
//!
//! Every query carries a visited set of (entity, resource) pairs. A pair
//! reached a second time contributes nothing, which bounds the traversal on
//! cyclic entity graphs and skips repeated work on diamonds.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use arbor_contracts::{
    Decision, DenyReason, EntityKey, Grant, GrantRule, Permission, ResourceKey, Verdict,
};

use crate::{access::AccessControl, traits::Authorizer};

/// Outcome of resolving one (entity, resource) pair.
enum Walk {
    Granted(Grant),
    ExplicitDeny,
    NotGranted,
}

type Visited = HashSet<(EntityKey, ResourceKey)>;

impl AccessControl {
    fn walk(
        &self,
        entity: EntityKey,
        resource: ResourceKey,
        action: Permission,
        visited: &mut Visited,
    ) -> Walk {
        if !visited.insert((entity, resource)) {
            trace!(entity = %entity, resource = %resource, "pair already visited");
            return Walk::NotGranted;
        }

        let (Some(e), Some(r)) = (self.entity(entity), self.resource(resource)) else {
            warn!(entity = %entity, resource = %resource, "query on unknown key; denying");
            return Walk::NotGranted;
        };

        let grant = |rule| Walk::Granted(Grant { rule, entity, resource });

        if r.is_owned_by(entity) {
            trace!(entity = e.id(), resource = r.id(), "owner");
            return grant(GrantRule::Owner);
        }

        match e.decision(action, resource) {
            Decision::Allow => {
                trace!(entity = e.id(), resource = r.id(), %action, "explicit allow");
                return grant(GrantRule::Explicit);
            }
            Decision::Deny => {
                trace!(entity = e.id(), resource = r.id(), %action, "explicit deny");
                return Walk::ExplicitDeny;
            }
            Decision::Unset => {}
        }

        if e.decision(Permission::All, resource) == Decision::Allow {
            trace!(entity = e.id(), resource = r.id(), "wildcard allow");
            return grant(GrantRule::Wildcard);
        }

        for parent in e.parents() {
            if let Walk::Granted(g) = self.walk(*parent, resource, action, visited) {
                return Walk::Granted(g);
            }
        }

        if let Some(parent) = r.parent() {
            if let Walk::Granted(g) = self.walk(entity, parent, action, visited) {
                return Walk::Granted(g);
            }
        }

        Walk::NotGranted
    }
}

impl Authorizer for AccessControl {
    fn explain(&self, entity: EntityKey, resource: ResourceKey, action: Permission) -> Verdict {
        let mut visited = Visited::new();
        let verdict = match self.walk(entity, resource, action, &mut visited) {
            Walk::Granted(grant) => Verdict::Allow { grant },
            Walk::ExplicitDeny => Verdict::Deny {
                reason: DenyReason::ExplicitDeny,
            },
            Walk::NotGranted => Verdict::Deny {
                reason: DenyReason::NoGrant,
            },
        };

        debug!(
            entity = %entity,
            resource = %resource,
            %action,
            allowed = verdict.is_allowed(),
            visited = visited.len(),
            "permission resolved"
        );

        verdict
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
