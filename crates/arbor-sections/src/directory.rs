//! Name-keyed users, groups and sections.
//!
//! `SectionDirectory` maps the flat model onto the graph:
//!
//! - each section is a root resource
//! - each group and each user is an entity
//! - a user's groups are its parent entities
//! - one hidden "defaults" entity is an extra parent of every user and holds
//!   the per-section baseline
//!
//! A permission set granted to a user, a group or the defaults is
//! authoritative for its holder: listed actions are recorded as `Allow`,
//! unlisted concrete actions as `Deny`. With that layout the shared resolver
//! yields owner → user's own set → any granting group → section defaults →
//! deny.

use std::collections::HashMap;

use tracing::debug;

use arbor_contracts::{ArborError, ArborResult, EntityKey, Permission, ResourceKey};
use arbor_core::{AccessControl, Authorizer};

const DEFAULTS_ENTITY: &str = "section-defaults";

/// Users, groups and sections addressed by name.
#[derive(Debug, Clone)]
pub struct SectionDirectory {
    access: AccessControl,
    defaults: EntityKey,
    users: HashMap<String, EntityKey>,
    groups: HashMap<String, EntityKey>,
    sections: HashMap<String, ResourceKey>,
}

impl Default for SectionDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionDirectory {
    pub fn new() -> Self {
        let mut access = AccessControl::new();
        let defaults = access.create_entity(DEFAULTS_ENTITY);
        Self {
            access,
            defaults,
            users: HashMap::new(),
            groups: HashMap::new(),
            sections: HashMap::new(),
        }
    }

    // ── Declarations ─────────────────────────────────────────────────────────

    pub fn add_section(&mut self, name: &str) -> ArborResult<()> {
        if self.sections.contains_key(name) {
            return Err(ArborError::DuplicateId {
                kind: "section",
                id: name.to_string(),
            });
        }
        let key = self.access.create_resource(name);
        self.sections.insert(name.to_string(), key);
        Ok(())
    }

    pub fn add_group(&mut self, name: &str) -> ArborResult<()> {
        if self.groups.contains_key(name) {
            return Err(ArborError::DuplicateId {
                kind: "group",
                id: name.to_string(),
            });
        }
        let key = self.access.create_entity(name);
        self.groups.insert(name.to_string(), key);
        Ok(())
    }

    /// Declare a user belonging to `groups`. Every group must already exist.
    pub fn add_user(&mut self, name: &str, groups: &[&str]) -> ArborResult<()> {
        if self.users.contains_key(name) {
            return Err(ArborError::DuplicateId {
                kind: "user",
                id: name.to_string(),
            });
        }
        let parents = groups
            .iter()
            .map(|g| self.group_key(g))
            .collect::<ArborResult<Vec<_>>>()?;

        let key = self.access.create_entity(name);
        self.access.add_parents(key, &parents);
        self.access.link(self.defaults, key);
        self.users.insert(name.to_string(), key);
        Ok(())
    }

    /// Add an existing user to an existing group.
    pub fn join_group(&mut self, user: &str, group: &str) -> ArborResult<()> {
        let user = self.user_key(user)?;
        let group = self.group_key(group)?;
        self.access.link(group, user);
        Ok(())
    }

    // ── Permission sets ──────────────────────────────────────────────────────

    /// Baseline every user gets on `section` when neither the user nor any
    /// of its groups grants the action.
    pub fn set_section_defaults(
        &mut self,
        section: &str,
        permissions: &[Permission],
    ) -> ArborResult<()> {
        let section = self.section_key(section)?;
        self.record(self.defaults, section, permissions);
        Ok(())
    }

    pub fn grant_group(
        &mut self,
        group: &str,
        section: &str,
        permissions: &[Permission],
    ) -> ArborResult<()> {
        let group = self.group_key(group)?;
        let section = self.section_key(section)?;
        self.record(group, section, permissions);
        Ok(())
    }

    /// Give `user` a personal permission set on `section`. It replaces
    /// anything the user's groups or the defaults would grant.
    pub fn grant_user(
        &mut self,
        user: &str,
        section: &str,
        permissions: &[Permission],
    ) -> ArborResult<()> {
        let user = self.user_key(user)?;
        let section = self.section_key(section)?;
        self.record(user, section, permissions);
        Ok(())
    }

    /// Remove a user's personal set on `section`, so groups and defaults
    /// apply again.
    pub fn revoke_user(&mut self, user: &str, section: &str) -> ArborResult<()> {
        let user = self.user_key(user)?;
        let section = self.section_key(section)?;
        if let Some(e) = self.access.entity_mut(user) {
            for p in Permission::VALUES {
                e.clear_perm(p, section);
            }
        }
        Ok(())
    }

    pub fn make_owner(&mut self, user: &str, section: &str) -> ArborResult<()> {
        let user = self.user_key(user)?;
        let section = self.section_key(section)?;
        self.access.add_owners(section, &[user]);
        Ok(())
    }

    /// Write a complete set: every concrete action gets an explicit cell.
    fn record(&mut self, holder: EntityKey, section: ResourceKey, permissions: &[Permission]) {
        let everything = permissions.contains(&Permission::All);
        let Some(entity) = self.access.entity_mut(holder) else {
            return;
        };
        for action in Permission::ACTIONS {
            entity.add_perm(action, section, everything || permissions.contains(&action));
        }
        let complete = everything || Permission::ACTIONS.iter().all(|a| permissions.contains(a));
        entity.add_perm(Permission::All, section, complete);

        debug!(holder = entity.id(), section = %section, ?permissions, "section permission set recorded");
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn has_permission(&self, user: &str, section: &str, action: Permission) -> ArborResult<bool> {
        let user = self.user_key(user)?;
        let section = self.section_key(section)?;
        Ok(self.access.has_permission(user, section, action))
    }

    pub fn can_create(&self, user: &str, section: &str) -> ArborResult<bool> {
        self.has_permission(user, section, Permission::Create)
    }

    pub fn can_read(&self, user: &str, section: &str) -> ArborResult<bool> {
        self.has_permission(user, section, Permission::Read)
    }

    pub fn can_update(&self, user: &str, section: &str) -> ArborResult<bool> {
        self.has_permission(user, section, Permission::Update)
    }

    pub fn can_delete(&self, user: &str, section: &str) -> ArborResult<bool> {
        self.has_permission(user, section, Permission::Delete)
    }

    /// The underlying graph, for callers that want `explain` or key-based
    /// queries.
    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    pub fn user_key(&self, name: &str) -> ArborResult<EntityKey> {
        self.users
            .get(name)
            .copied()
            .ok_or_else(|| ArborError::UnknownEntity { id: name.to_string() })
    }

    pub fn group_key(&self, name: &str) -> ArborResult<EntityKey> {
        self.groups
            .get(name)
            .copied()
            .ok_or_else(|| ArborError::UnknownEntity { id: name.to_string() })
    }

    pub fn section_key(&self, name: &str) -> ArborResult<ResourceKey> {
        self.sections
            .get(name)
            .copied()
            .ok_or_else(|| ArborError::UnknownResource { id: name.to_string() })
    }
}
