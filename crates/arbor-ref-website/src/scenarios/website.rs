//! Scenario 2: Website
//!
//! Loads `policies/website.toml`: a resource tree with owners on individual
//! articles and threads, and users that belong to more than one group.
//! Prints the decision table, then explains a handful of decisions by
//! naming the node and rule that settled them.

use arbor_contracts::{ArborResult, Permission};
use arbor_policy::PolicyGraph;

use crate::report::{crud_row, describe, print_header, print_row};

const WEBSITE_POLICY: &str = include_str!("../../../../policies/website.toml");

const USERS: [&str; 4] = ["root", "alice", "bob", "carol"];

const RESOURCES: [&str; 7] = [
    "website",
    "news",
    "article-1",
    "article-2",
    "forum",
    "thread-1",
    "settings",
];

/// Queries worth explaining, with what makes each one interesting.
const EXPLAINED: [(&str, &str, Permission, &str); 5] = [
    ("alice", "article-1", Permission::Delete, "alice owns article-1"),
    ("alice", "article-2", Permission::Update, "editors on news"),
    ("bob", "thread-1", Permission::Delete, "moderators hold ALL on forum"),
    ("carol", "news", Permission::Read, "carol's own deny"),
    ("root", "settings", Permission::Delete, "root's own deny"),
];

// ── Scenario runner ───────────────────────────────────────────────────────────

/// Run Scenario 2: Website.
pub fn run_scenario() -> ArborResult<()> {
    println!("=== Scenario 2: Website ===");
    println!();

    let graph = PolicyGraph::from_toml_str(WEBSITE_POLICY)?;
    println!(
        "  Policy loaded: {} entities, {} resources",
        graph.access().entity_count(),
        graph.access().resource_count()
    );
    println!();

    print_header();
    for user in USERS {
        let entity = graph.entity_key(user)?;
        for name in RESOURCES {
            let resource = graph.resource_key(name)?;
            print_row(user, name, crud_row(&graph, entity, resource));
        }
    }
    println!();

    println!("  Provenance:");
    for (user, resource, action, note) in EXPLAINED {
        let verdict = graph.explain_by_id(user, resource, action)?;
        println!(
            "  {:<6} {:<7} {:<10} {:<45} [{}]",
            user,
            action.as_str(),
            resource,
            describe(graph.access(), &verdict),
            note
        );
    }
    println!();

    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
