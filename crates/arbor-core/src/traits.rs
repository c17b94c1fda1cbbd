//! The query surface of the permission engine.
//!
//! `Authorizer` is the trait embedding applications call. `AccessControl`
//! implements it over its own arena; adapters such as the flat section
//! directory delegate to that implementation rather than re-deriving the
//! precedence rules.

use arbor_contracts::{EntityKey, Permission, ResourceKey, Verdict};

/// Answers "may this entity perform this action on this resource?".
///
/// Implementations must be pure: a query never changes the graph, and the
/// same graph always yields the same verdict. Queries are total: unknown
/// keys and missing table entries deny rather than fail.
pub trait Authorizer: Send + Sync {
    /// Resolve a query and report which node decided it.
    fn explain(&self, entity: EntityKey, resource: ResourceKey, action: Permission) -> Verdict;

    /// Resolve a query to a plain allow/deny.
    fn has_permission(&self, entity: EntityKey, resource: ResourceKey, action: Permission) -> bool {
        self.explain(entity, resource, action).is_allowed()
    }

    fn can(&self, entity: EntityKey, resource: ResourceKey, action: Permission) -> bool {
        self.has_permission(entity, resource, action)
    }

    fn can_create(&self, entity: EntityKey, resource: ResourceKey) -> bool {
        self.can(entity, resource, Permission::Create)
    }

    fn can_read(&self, entity: EntityKey, resource: ResourceKey) -> bool {
        self.can(entity, resource, Permission::Read)
    }

    fn can_update(&self, entity: EntityKey, resource: ResourceKey) -> bool {
        self.can(entity, resource, Permission::Update)
    }

    fn can_delete(&self, entity: EntityKey, resource: ResourceKey) -> bool {
        self.can(entity, resource, Permission::Delete)
    }
}
