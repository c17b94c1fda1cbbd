//! Console output shared by the scenarios.

use arbor_contracts::{DenyReason, EntityKey, Permission, ResourceKey, Verdict};
use arbor_core::{AccessControl, Authorizer};

/// The four concrete actions for one (entity, resource) pair, in
/// create/read/update/delete order.
pub fn crud_row<A: Authorizer>(auth: &A, entity: EntityKey, resource: ResourceKey) -> [bool; 4] {
    Permission::ACTIONS.map(|action| auth.has_permission(entity, resource, action))
}

pub fn print_header() {
    println!(
        "  {:<12} {:<12} {:^7} {:^7} {:^7} {:^7}",
        "entity", "resource", "create", "read", "update", "delete"
    );
    println!("  {}", "-".repeat(58));
}

pub fn print_row(entity: &str, resource: &str, row: [bool; 4]) {
    let cell = |b: bool| if b { "yes" } else { "-" };
    println!(
        "  {:<12} {:<12} {:^7} {:^7} {:^7} {:^7}",
        entity,
        resource,
        cell(row[0]),
        cell(row[1]),
        cell(row[2]),
        cell(row[3])
    );
}

/// One-line account of a verdict, naming nodes by their ids.
pub fn describe(access: &AccessControl, verdict: &Verdict) -> String {
    match verdict {
        Verdict::Allow { grant } => {
            let entity = access.entity(grant.entity).map_or("?", |e| e.id());
            let resource = access.resource(grant.resource).map_or("?", |r| r.id());
            format!("ALLOW ({:?} held by {} on {})", grant.rule, entity, resource)
        }
        Verdict::Deny {
            reason: DenyReason::ExplicitDeny,
        } => "DENY (explicit deny on this pair)".to_string(),
        Verdict::Deny {
            reason: DenyReason::NoGrant,
        } => "DENY (nothing grants it)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crud_row_order() {
        let mut ac = AccessControl::new();
        let user = ac.create_entity("user");
        let doc = ac.create_resource("doc");
        ac.allow(user, doc, Permission::Update);

        assert_eq!(crud_row(&ac, user, doc), [false, false, true, false]);
    }

    #[test]
    fn test_describe_names_the_deciding_node() {
        let mut ac = AccessControl::new();
        let group = ac.create_entity("editors");
        let user = ac.create_child(group, "alice");
        let site = ac.create_resource("site");
        let page = ac.create_sub(site, "page");
        ac.allow(group, site, Permission::All);

        let verdict = ac.explain(user, page, Permission::Read);
        assert_eq!(describe(&ac, &verdict), "ALLOW (Wildcard held by editors on site)");

        ac.deny(user, page, Permission::Read);
        let verdict = ac.explain(user, page, Permission::Read);
        assert_eq!(describe(&ac, &verdict), "DENY (explicit deny on this pair)");
    }
}
