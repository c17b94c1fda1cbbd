//! Entity nodes: actors in the inheritance graph.
//!
//! An entity is a user, group or role. It carries its own permission table
//! and its links to parent and child entities. Links are only written by
//! `AccessControl`, which keeps both directions in step.

use std::collections::HashMap;

use arbor_contracts::{Decision, EntityKey, Permission, ResourceKey};

/// An actor in the permission graph.
///
/// The permission table maps (action, resource) to an explicit `Allow` or
/// `Deny`. A missing cell reads as `Decision::Unset`.
#[derive(Debug, Clone)]
pub struct Entity {
    id: String,
    parents: Vec<EntityKey>,
    children: Vec<EntityKey>,
    table: HashMap<Permission, HashMap<ResourceKey, Decision>>,
}

impl Entity {
    /// Create a detached entity with an empty bucket for every permission.
    pub fn new(id: impl Into<String>) -> Self {
        let table = Permission::VALUES
            .iter()
            .map(|p| (*p, HashMap::new()))
            .collect();
        Self {
            id: id.into(),
            parents: Vec::new(),
            children: Vec::new(),
            table,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Parent entities, in the order they were attached.
    pub fn parents(&self) -> &[EntityKey] {
        &self.parents
    }

    /// Child entities, in the order they were attached.
    pub fn children(&self) -> &[EntityKey] {
        &self.children
    }

    pub fn has_parent(&self, parent: EntityKey) -> bool {
        self.parents.contains(&parent)
    }

    pub fn has_child(&self, child: EntityKey) -> bool {
        self.children.contains(&child)
    }

    /// Record `Allow` for each of `permissions` on `resource`.
    pub fn allow(&mut self, resource: ResourceKey, permissions: &[Permission]) -> &mut Self {
        for permission in permissions {
            self.add_perm(*permission, resource, true);
        }
        self
    }

    /// Record `Deny` for each of `permissions` on `resource`.
    pub fn deny(&mut self, resource: ResourceKey, permissions: &[Permission]) -> &mut Self {
        for permission in permissions {
            self.add_perm(*permission, resource, false);
        }
        self
    }

    /// Set one cell of the permission table. Every setter funnels through here.
    pub fn add_perm(&mut self, permission: Permission, resource: ResourceKey, enabled: bool) {
        self.table
            .entry(permission)
            .or_default()
            .insert(resource, Decision::from(enabled));
    }

    pub fn add_perm_all(&mut self, resource: ResourceKey, enabled: bool) {
        self.add_perm(Permission::All, resource, enabled);
    }

    pub fn add_perm_create(&mut self, resource: ResourceKey, enabled: bool) {
        self.add_perm(Permission::Create, resource, enabled);
    }

    pub fn add_perm_read(&mut self, resource: ResourceKey, enabled: bool) {
        self.add_perm(Permission::Read, resource, enabled);
    }

    pub fn add_perm_update(&mut self, resource: ResourceKey, enabled: bool) {
        self.add_perm(Permission::Update, resource, enabled);
    }

    pub fn add_perm_delete(&mut self, resource: ResourceKey, enabled: bool) {
        self.add_perm(Permission::Delete, resource, enabled);
    }

    /// Drop an explicit decision so the cell reads as `Unset` again.
    ///
    /// Returns the decision that was removed.
    pub fn clear_perm(&mut self, permission: Permission, resource: ResourceKey) -> Decision {
        self.table
            .get_mut(&permission)
            .and_then(|cells| cells.remove(&resource))
            .unwrap_or_default()
    }

    /// Look up one cell of the permission table.
    pub fn decision(&self, permission: Permission, resource: ResourceKey) -> Decision {
        self.table
            .get(&permission)
            .and_then(|cells| cells.get(&resource))
            .copied()
            .unwrap_or_default()
    }

    /// Every explicit decision this entity holds, in no particular order.
    pub fn decisions(&self) -> impl Iterator<Item = (Permission, ResourceKey, Decision)> + '_ {
        self.table.iter().flat_map(|(permission, cells)| {
            cells
                .iter()
                .map(move |(resource, decision)| (*permission, *resource, *decision))
        })
    }

    pub(crate) fn push_parent(&mut self, parent: EntityKey) {
        if !self.has_parent(parent) {
            self.parents.push(parent);
        }
    }

    pub(crate) fn push_child(&mut self, child: EntityKey) {
        if !self.has_child(child) {
            self.children.push(child);
        }
    }

    pub(crate) fn clear_links(&mut self) {
        self.parents.clear();
        self.children.clear();
    }
}
