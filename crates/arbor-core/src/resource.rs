//! Resource nodes: protected objects in the containment forest.

use std::collections::HashMap;

use arbor_contracts::{EntityKey, ResourceKey};

/// A protected object, optionally nested under a parent resource.
///
/// The parent link and the sub-resource map are only written by
/// `AccessControl::add_subs`, which keeps them consistent.
#[derive(Debug, Clone)]
pub struct Resource {
    id: String,
    parent: Option<ResourceKey>,
    subs: HashMap<String, ResourceKey>,
    owners: Vec<EntityKey>,
}

impl Resource {
    /// Create a detached resource with no sub-resources and no owners.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            subs: HashMap::new(),
            owners: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent(&self) -> Option<ResourceKey> {
        self.parent
    }

    /// Direct sub-resource by id. Does not search deeper levels.
    pub fn get_sub(&self, id: &str) -> Option<ResourceKey> {
        self.subs.get(id).copied()
    }

    /// Direct sub-resources, keyed by id.
    pub fn subs(&self) -> impl Iterator<Item = (&str, ResourceKey)> + '_ {
        self.subs.iter().map(|(id, key)| (id.as_str(), *key))
    }

    pub fn owners(&self) -> &[EntityKey] {
        &self.owners
    }

    pub fn is_owned_by(&self, entity: EntityKey) -> bool {
        self.owners.contains(&entity)
    }

    /// Append owners. Duplicates are kept; they do not change any decision.
    pub fn add_owners(&mut self, owners: &[EntityKey]) -> &mut Self {
        self.owners.extend_from_slice(owners);
        self
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ResourceKey>) {
        self.parent = parent;
    }

    pub(crate) fn clear_links(&mut self) {
        self.parent = None;
        self.subs.clear();
    }

    /// Insert a sub-resource entry, returning whatever was stored under the
    /// same id before.
    pub(crate) fn insert_sub(&mut self, id: String, sub: ResourceKey) -> Option<ResourceKey> {
        self.subs.insert(id, sub)
    }

    /// Remove the entry for `sub`, but only if it still points at `sub`.
    pub(crate) fn remove_sub(&mut self, id: &str, sub: ResourceKey) -> bool {
        if self.subs.get(id) == Some(&sub) {
            self.subs.remove(id);
            true
        } else {
            false
        }
    }
}
