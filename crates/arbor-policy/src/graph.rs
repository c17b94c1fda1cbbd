//! Building a permission graph from a policy document.
//!
//! `PolicyGraph` loads a `PolicyConfig` from a TOML string or file, builds
//! an `AccessControl` arena from it, and keeps an index from declared ids to
//! arena keys so queries can be made by name.
//!
//! Build order:
//!
//! 1. Create every entity and resource, rejecting duplicate ids.
//! 2. Link entities to their parents, in declared order.
//! 3. Attach resources beneath their parents and record owners.
//! 4. Apply grants: `allow` lists first, then `deny` lists.
//!
//! Any reference to an undeclared id, or an unknown permission name, fails
//! the whole load.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use arbor_contracts::{ArborError, ArborResult, EntityKey, Permission, ResourceKey, Verdict};
use arbor_core::{AccessControl, Authorizer};

use crate::config::PolicyConfig;

/// A permission graph built from a policy document, queryable by id.
#[derive(Debug, Clone)]
pub struct PolicyGraph {
    access: AccessControl,
    entities: HashMap<String, EntityKey>,
    resources: HashMap<String, ResourceKey>,
}

impl PolicyGraph {
    /// Parse `s` as TOML and build the graph it declares.
    ///
    /// Returns `ArborError::ConfigError` if the TOML is malformed or does not
    /// match the `PolicyConfig` schema, and the reference errors described
    /// on [`from_config`](Self::from_config).
    pub fn from_toml_str(s: &str) -> ArborResult<Self> {
        let config: PolicyConfig = toml::from_str(s).map_err(|e| ArborError::ConfigError {
            reason: format!("failed to parse policy TOML: {}", e),
        })?;
        Self::from_config(&config)
    }

    /// Read the file at `path` and build the graph it declares.
    pub fn from_file(path: &Path) -> ArborResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ArborError::ConfigError {
            reason: format!("failed to read policy file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build the graph declared by `config`.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if two entities or two resources share an id
    /// - `UnknownEntity` / `UnknownResource` for a dangling reference
    /// - `UnknownPermission` for an unparsable permission name
    pub fn from_config(config: &PolicyConfig) -> ArborResult<Self> {
        let mut graph = Self {
            access: AccessControl::new(),
            entities: HashMap::new(),
            resources: HashMap::new(),
        };

        for spec in &config.entities {
            if graph.entities.contains_key(&spec.id) {
                return Err(ArborError::DuplicateId {
                    kind: "entity",
                    id: spec.id.clone(),
                });
            }
            let key = graph.access.create_entity(spec.id.clone());
            graph.entities.insert(spec.id.clone(), key);
        }

        for spec in &config.resources {
            if graph.resources.contains_key(&spec.id) {
                return Err(ArborError::DuplicateId {
                    kind: "resource",
                    id: spec.id.clone(),
                });
            }
            let key = graph.access.create_resource(spec.id.clone());
            graph.resources.insert(spec.id.clone(), key);
        }

        for spec in &config.entities {
            let child = graph.entity_key(&spec.id)?;
            for parent in &spec.parents {
                let parent = graph.entity_key(parent)?;
                graph.access.link(parent, child);
            }
        }

        for spec in &config.resources {
            let key = graph.resource_key(&spec.id)?;
            if let Some(parent) = &spec.parent {
                let parent = graph.resource_key(parent)?;
                graph.access.add_subs(parent, &[key]);
            }
            let owners = spec
                .owners
                .iter()
                .map(|id| graph.entity_key(id))
                .collect::<ArborResult<Vec<_>>>()?;
            graph.access.add_owners(key, &owners);
        }

        for spec in &config.grants {
            let entity = graph.entity_key(&spec.entity)?;
            let resource = graph.resource_key(&spec.resource)?;
            let allow = parse_permissions(&spec.allow)?;
            let deny = parse_permissions(&spec.deny)?;

            debug!(
                entity = %spec.entity,
                resource = %spec.resource,
                allow = ?allow,
                deny = ?deny,
                "applying grant"
            );

            if let Some(e) = graph.access.entity_mut(entity) {
                e.allow(resource, &allow).deny(resource, &deny);
            }
        }

        info!(
            entities = graph.entities.len(),
            resources = graph.resources.len(),
            grants = config.grants.len(),
            "policy graph loaded"
        );

        Ok(graph)
    }

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    /// Give up the name index and keep only the arena.
    pub fn into_access(self) -> AccessControl {
        self.access
    }

    pub fn entity_key(&self, id: &str) -> ArborResult<EntityKey> {
        self.entities
            .get(id)
            .copied()
            .ok_or_else(|| ArborError::UnknownEntity { id: id.to_string() })
    }

    pub fn resource_key(&self, id: &str) -> ArborResult<ResourceKey> {
        self.resources
            .get(id)
            .copied()
            .ok_or_else(|| ArborError::UnknownResource { id: id.to_string() })
    }

    /// Resolve a query by declared ids.
    pub fn check(&self, entity: &str, resource: &str, action: Permission) -> ArborResult<bool> {
        Ok(self.explain_by_id(entity, resource, action)?.is_allowed())
    }

    /// Resolve a query by declared ids and report which node decided it.
    pub fn explain_by_id(
        &self,
        entity: &str,
        resource: &str,
        action: Permission,
    ) -> ArborResult<Verdict> {
        let entity = self.entity_key(entity)?;
        let resource = self.resource_key(resource)?;
        Ok(self.access.explain(entity, resource, action))
    }
}

impl Authorizer for PolicyGraph {
    fn explain(&self, entity: EntityKey, resource: ResourceKey, action: Permission) -> Verdict {
        self.access.explain(entity, resource, action)
    }
}

fn parse_permissions(names: &[String]) -> ArborResult<Vec<Permission>> {
    names.iter().map(|name| name.parse()).collect()
}
