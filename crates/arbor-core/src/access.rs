//! The `AccessControl` arena: registry and graph mutators.
//!
//! Every entity and resource lives here and is addressed by a key. All
//! operations that touch two nodes at once (entity links, sub-resource
//! attachment) go through this type so both sides stay consistent.
//!
//! Keys are only meaningful for the arena that issued them. A foreign or
//! stale key is treated as a miss: accessors return `None`, mutators do
//! nothing, and resolution denies.

use tracing::{debug, warn};

use arbor_contracts::{EntityKey, Permission, ResourceKey};

use crate::{entity::Entity, resource::Resource};

/// Registry of entities and resources, and the resolver over them.
///
/// Build the graph with the `create_*`/`add_*` methods, then query it
/// through the [`Authorizer`](crate::traits::Authorizer) trait.
///
/// ```rust,ignore
/// use arbor_contracts::Permission;
/// use arbor_core::{AccessControl, Authorizer};
///
/// let mut ac = AccessControl::new();
/// let user = ac.create_entity("user1");
/// let doc = ac.create_resource("document");
/// ac.allow(user, doc, Permission::Read);
/// assert!(ac.can_read(user, doc));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccessControl {
    entities: Vec<Entity>,
    resources: Vec<Resource>,
}

impl AccessControl {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Registry ─────────────────────────────────────────────────────────────

    /// Create an entity and register it.
    pub fn create_entity(&mut self, id: impl Into<String>) -> EntityKey {
        self.add_entity(Entity::new(id))
    }

    /// Register an entity built elsewhere.
    ///
    /// Links are arena keys, so an entity can only arrive here without
    /// parents or children; any it carries are dropped.
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        let key = EntityKey(self.entities.len());
        let mut entity = entity;
        entity.clear_links();
        debug!(entity = %entity.id(), key = %key, "entity registered");
        self.entities.push(entity);
        key
    }

    pub fn add_entities(&mut self, entities: impl IntoIterator<Item = Entity>) -> Vec<EntityKey> {
        entities.into_iter().map(|e| self.add_entity(e)).collect()
    }

    /// Create a resource and register it.
    pub fn create_resource(&mut self, id: impl Into<String>) -> ResourceKey {
        self.add_resource(Resource::new(id))
    }

    /// Register a resource built elsewhere. Its parent link and sub-resource
    /// map are reset, for the same reason as [`add_entity`](Self::add_entity).
    pub fn add_resource(&mut self, resource: Resource) -> ResourceKey {
        let key = ResourceKey(self.resources.len());
        let mut resource = resource;
        resource.clear_links();
        debug!(resource = %resource.id(), key = %key, "resource registered");
        self.resources.push(resource);
        key
    }

    pub fn add_resources(
        &mut self,
        resources: impl IntoIterator<Item = Resource>,
    ) -> Vec<ResourceKey> {
        resources.into_iter().map(|r| self.add_resource(r)).collect()
    }

    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key.index())
    }

    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key.index())
    }

    pub fn resource(&self, key: ResourceKey) -> Option<&Resource> {
        self.resources.get(key.index())
    }

    pub fn resource_mut(&mut self, key: ResourceKey) -> Option<&mut Resource> {
        self.resources.get_mut(key.index())
    }

    /// First registered entity with the given id.
    pub fn find_entity(&self, id: &str) -> Option<EntityKey> {
        self.entities
            .iter()
            .position(|e| e.id() == id)
            .map(EntityKey)
    }

    /// First registered resource with the given id.
    pub fn find_resource(&self, id: &str) -> Option<ResourceKey> {
        self.resources
            .iter()
            .position(|r| r.id() == id)
            .map(ResourceKey)
    }

    pub fn entities(&self) -> impl Iterator<Item = (EntityKey, &Entity)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityKey(i), e))
    }

    pub fn resources(&self) -> impl Iterator<Item = (ResourceKey, &Resource)> + '_ {
        self.resources
            .iter()
            .enumerate()
            .map(|(i, r)| (ResourceKey(i), r))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    // ── Entity hierarchy ─────────────────────────────────────────────────────

    /// Make `parent` a parent of `child`, writing both directions.
    ///
    /// This is the only writer of entity links. Linking an existing edge
    /// again is a no-op, in either direction.
    pub fn link(&mut self, parent: EntityKey, child: EntityKey) {
        if self.entity(parent).is_none() || self.entity(child).is_none() {
            warn!(parent = %parent, child = %child, "link ignored: unknown entity key");
            return;
        }
        if let Some(c) = self.entity_mut(child) {
            c.push_parent(parent);
        }
        if let Some(p) = self.entity_mut(parent) {
            p.push_child(child);
        }
    }

    pub fn add_children(&mut self, parent: EntityKey, children: &[EntityKey]) {
        for child in children {
            self.link(parent, *child);
        }
    }

    pub fn add_parents(&mut self, child: EntityKey, parents: &[EntityKey]) {
        for parent in parents {
            self.link(*parent, child);
        }
    }

    /// Create an entity and attach it as a child of `parent`.
    pub fn create_child(&mut self, parent: EntityKey, id: impl Into<String>) -> EntityKey {
        let child = self.create_entity(id);
        self.link(parent, child);
        child
    }

    // ── Resource containment ─────────────────────────────────────────────────

    /// Attach `subs` beneath `parent`.
    ///
    /// A resource that already had a parent is moved: its entry in the old
    /// parent's map is removed. If `parent` already held a different
    /// resource under the same id, that resource is detached.
    pub fn add_subs(&mut self, parent: ResourceKey, subs: &[ResourceKey]) {
        if self.resource(parent).is_none() {
            warn!(parent = %parent, "add_subs ignored: unknown resource key");
            return;
        }
        for sub in subs {
            self.attach_sub(parent, *sub);
        }
    }

    fn attach_sub(&mut self, parent: ResourceKey, sub: ResourceKey) {
        let (sub_id, old_parent) = match self.resource(sub) {
            Some(r) => (r.id().to_string(), r.parent()),
            None => {
                warn!(sub = %sub, "sub-resource ignored: unknown resource key");
                return;
            }
        };

        if let Some(old) = old_parent.filter(|old| *old != parent) {
            if let Some(old_res) = self.resource_mut(old) {
                old_res.remove_sub(&sub_id, sub);
            }
            warn!(resource = %sub_id, from = %old, to = %parent, "resource re-parented");
        }

        let displaced = self
            .resource_mut(parent)
            .and_then(|p| p.insert_sub(sub_id.clone(), sub));
        if let Some(displaced) = displaced.filter(|d| *d != sub) {
            if let Some(d) = self.resource_mut(displaced) {
                d.set_parent(None);
            }
            warn!(resource = %sub_id, parent = %parent, displaced = %displaced, "sub-resource id collision; previous sub-resource detached");
        }

        if let Some(r) = self.resource_mut(sub) {
            r.set_parent(Some(parent));
        }
    }

    /// Create a resource and attach it beneath `parent`.
    pub fn create_sub(&mut self, parent: ResourceKey, id: impl Into<String>) -> ResourceKey {
        let sub = self.create_resource(id);
        self.add_subs(parent, &[sub]);
        sub
    }

    /// Create several sub-resources beneath `parent`.
    pub fn create_subs<I, S>(&mut self, parent: ResourceKey, ids: I) -> Vec<ResourceKey>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter().map(|id| self.create_sub(parent, id)).collect()
    }

    /// Direct sub-resource of `parent` by id.
    pub fn get_sub(&self, parent: ResourceKey, id: &str) -> Option<ResourceKey> {
        self.resource(parent).and_then(|r| r.get_sub(id))
    }

    pub fn add_owners(&mut self, resource: ResourceKey, owners: &[EntityKey]) {
        match self.resource_mut(resource) {
            Some(r) => {
                r.add_owners(owners);
            }
            None => warn!(resource = %resource, "add_owners ignored: unknown resource key"),
        }
    }

    // ── Permission tables ────────────────────────────────────────────────────

    /// Record `Allow` for `permission` on (entity, resource).
    pub fn allow(&mut self, entity: EntityKey, resource: ResourceKey, permission: Permission) {
        self.add_perm(entity, permission, resource, true);
    }

    /// Record `Deny` for `permission` on (entity, resource).
    pub fn deny(&mut self, entity: EntityKey, resource: ResourceKey, permission: Permission) {
        self.add_perm(entity, permission, resource, false);
    }

    pub fn add_perm(
        &mut self,
        entity: EntityKey,
        permission: Permission,
        resource: ResourceKey,
        enabled: bool,
    ) {
        match self.entity_mut(entity) {
            Some(e) => e.add_perm(permission, resource, enabled),
            None => warn!(entity = %entity, "permission ignored: unknown entity key"),
        }
    }
}
