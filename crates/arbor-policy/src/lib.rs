//! # arbor-policy
//!
//! Builds an arbor permission graph from a TOML policy document.
//!
//! ## Overview
//!
//! This crate provides [`PolicyGraph`], which owns an
//! [`AccessControl`](arbor_core::AccessControl) arena built from a
//! [`PolicyConfig`] and implements the
//! [`Authorizer`](arbor_core::Authorizer) trait over it. Queries can also be
//! made by declared id through [`PolicyGraph::check`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use arbor_contracts::Permission;
//! use arbor_policy::PolicyGraph;
//!
//! let graph = PolicyGraph::from_file(Path::new("policies/website.toml"))?;
//! let allowed = graph.check("alice", "news", Permission::Update)?;
//! ```

pub mod config;
pub mod graph;

pub use config::{EntitySpec, GrantSpec, PolicyConfig, ResourceSpec};
pub use graph::PolicyGraph;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use arbor_contracts::{ArborError, DenyReason, GrantRule, Permission, Verdict};
    use arbor_core::Authorizer;

    use crate::PolicyGraph;

    const NEWSROOM: &str = r#"
        [[entities]]
        id = "groups"

        [[entities]]
        id = "admins"
        parents = ["groups"]

        [[entities]]
        id = "moderators"
        parents = ["groups"]

        [[entities]]
        id = "alice"
        parents = ["admins"]

        [[entities]]
        id = "bob"
        parents = ["moderators"]

        [[resources]]
        id = "website"

        [[resources]]
        id = "article-1"
        parent = "news"
        owners = ["bob"]

        [[resources]]
        id = "news"
        parent = "website"

        [[grants]]
        entity = "admins"
        resource = "website"
        allow = ["*"]

        [[grants]]
        entity = "moderators"
        resource = "website"
        allow = ["read", "create", "update"]

        [[grants]]
        entity = "alice"
        resource = "news"
        deny = ["read"]
    "#;

    // ── 1. empty document ─────────────────────────────────────────────────────

    #[test]
    fn test_empty_document_builds_empty_graph() {
        let graph = PolicyGraph::from_toml_str("").unwrap();
        assert_eq!(graph.access().entity_count(), 0);
        assert_eq!(graph.access().resource_count(), 0);
    }

    // ── 2. links and grants ───────────────────────────────────────────────────

    #[test]
    fn test_links_resolve_regardless_of_order() {
        let graph = PolicyGraph::from_toml_str(NEWSROOM).unwrap();
        let ac = graph.access();

        let news = graph.resource_key("news").unwrap();
        let website = graph.resource_key("website").unwrap();
        let article = graph.resource_key("article-1").unwrap();

        assert_eq!(ac.resource(news).unwrap().parent(), Some(website));
        assert_eq!(ac.resource(article).unwrap().parent(), Some(news));
        assert_eq!(ac.get_sub(news, "article-1"), Some(article));

        let alice = graph.entity_key("alice").unwrap();
        let admins = graph.entity_key("admins").unwrap();
        assert_eq!(ac.entity(alice).unwrap().parents(), &[admins]);
        assert!(ac.entity(admins).unwrap().has_child(alice));
    }

    #[test]
    fn test_inherited_grants_by_id() {
        let graph = PolicyGraph::from_toml_str(NEWSROOM).unwrap();

        assert!(graph.check("alice", "website", Permission::Delete).unwrap());
        assert!(graph.check("bob", "news", Permission::Update).unwrap());
        assert!(!graph.check("bob", "news", Permission::Delete).unwrap());
        assert!(!graph.check("groups", "website", Permission::Read).unwrap());
    }

    #[test]
    fn test_local_deny_and_ownership() {
        let graph = PolicyGraph::from_toml_str(NEWSROOM).unwrap();

        // alice's explicit deny on news wins for alice on news...
        assert!(!graph.check("alice", "news", Permission::Read).unwrap());
        assert_eq!(
            graph.explain_by_id("alice", "news", Permission::Read).unwrap(),
            Verdict::Deny {
                reason: DenyReason::ExplicitDeny
            }
        );
        // ...but not on the article below it, which reaches the admins'
        // wildcard on website through a different path.
        assert!(graph.check("alice", "article-1", Permission::Read).unwrap());

        // bob owns the article outright.
        let verdict = graph
            .explain_by_id("bob", "article-1", Permission::Delete)
            .unwrap();
        assert_eq!(verdict.grant().map(|g| g.rule), Some(GrantRule::Owner));
    }

    #[test]
    fn test_deny_list_applies_after_allow_list() {
        let toml = r#"
            [[entities]]
            id = "user"

            [[resources]]
            id = "doc"

            [[grants]]
            entity = "user"
            resource = "doc"
            allow = ["read", "UPDATE"]
            deny = ["read"]
        "#;
        let graph = PolicyGraph::from_toml_str(toml).unwrap();
        assert!(!graph.check("user", "doc", Permission::Read).unwrap());
        assert!(graph.check("user", "doc", Permission::Update).unwrap());
    }

    #[test]
    fn test_graph_implements_authorizer() {
        let graph = PolicyGraph::from_toml_str(NEWSROOM).unwrap();
        let bob = graph.entity_key("bob").unwrap();
        let website = graph.resource_key("website").unwrap();

        assert!(graph.can_create(bob, website));
        assert!(!graph.can_delete(bob, website));
    }

    // ── 3. errors ─────────────────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let result = PolicyGraph::from_toml_str("this is not valid toml ][[[");
        match result {
            Err(ArborError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse policy TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = PolicyGraph::from_file(std::path::Path::new("/nonexistent/policy.toml"));
        assert!(matches!(result, Err(ArborError::ConfigError { .. })));
    }

    #[test]
    fn test_duplicate_entity_id() {
        let toml = r#"
            [[entities]]
            id = "user"

            [[entities]]
            id = "user"
        "#;
        match PolicyGraph::from_toml_str(toml) {
            Err(ArborError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "entity");
                assert_eq!(id, "user");
            }
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_parent_entity() {
        let toml = r#"
            [[entities]]
            id = "user"
            parents = ["ghosts"]
        "#;
        match PolicyGraph::from_toml_str(toml) {
            Err(ArborError::UnknownEntity { id }) => assert_eq!(id, "ghosts"),
            other => panic!("expected UnknownEntity, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_parent_resource() {
        let toml = r#"
            [[resources]]
            id = "news"
            parent = "website"
        "#;
        match PolicyGraph::from_toml_str(toml) {
            Err(ArborError::UnknownResource { id }) => assert_eq!(id, "website"),
            other => panic!("expected UnknownResource, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_permission_name() {
        let toml = r#"
            [[entities]]
            id = "user"

            [[resources]]
            id = "doc"

            [[grants]]
            entity = "user"
            resource = "doc"
            allow = ["execute"]
        "#;
        match PolicyGraph::from_toml_str(toml) {
            Err(ArborError::UnknownPermission { value }) => assert_eq!(value, "execute"),
            other => panic!("expected UnknownPermission, got {:?}", other),
        }
    }

    #[test]
    fn test_check_unknown_ids() {
        let graph = PolicyGraph::from_toml_str(NEWSROOM).unwrap();
        assert!(matches!(
            graph.check("mallory", "news", Permission::Read),
            Err(ArborError::UnknownEntity { .. })
        ));
        assert!(matches!(
            graph.check("alice", "forum", Permission::Read),
            Err(ArborError::UnknownResource { .. })
        ));
    }

    // ── 4. verdict output ─────────────────────────────────────────────────────

    #[test]
    fn test_verdict_serializes_for_reporting() {
        let graph = PolicyGraph::from_toml_str(NEWSROOM).unwrap();
        let verdict = graph
            .explain_by_id("bob", "news", Permission::Read)
            .unwrap();
        let json = serde_json::to_value(verdict).unwrap();

        assert_eq!(json["verdict"], "allow");
        assert_eq!(json["grant"]["rule"], "explicit");
        assert_eq!(
            json["grant"]["entity"],
            graph.entity_key("moderators").unwrap().index()
        );
    }
}
