//! arbor permission engine — Demo CLI
//!
//! Runs the website reference scenarios, or answers a single permission
//! query against a TOML policy file.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- newsroom
//!   cargo run -p demo -- website
//!   cargo run -p demo -- sections
//!   cargo run -p demo -- check --policy policies/website.toml \
//!       --entity alice --resource article-2 --action update [--json]

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use arbor_contracts::{ArborResult, Permission};
use arbor_policy::PolicyGraph;
use arbor_ref_website::{
    report::describe,
    scenarios::{newsroom, sections, website},
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// arbor — hierarchical permission resolution demo.
///
/// Each scenario subcommand builds a fixed permission graph and prints the
/// resolver's decisions. `check` resolves one query against a policy file.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "arbor permission engine demo",
    long_about = "Runs arbor reference scenarios showing entity inheritance,\n\
                  resource containment, ownership and explicit denies."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: Newsroom (groups, a user-level deny, moving a resource).
    Newsroom,
    /// Scenario 2: Website (sample TOML policy with owners and provenance).
    Website,
    /// Scenario 3: Sections (flat users, groups and section defaults).
    Sections,
    /// Resolve one query against a TOML policy file.
    Check {
        /// Path to the policy file.
        #[arg(long)]
        policy: PathBuf,
        /// Entity id as declared in the policy.
        #[arg(long)]
        entity: String,
        /// Resource id as declared in the policy.
        #[arg(long)]
        resource: String,
        /// create, read, update, delete, or all.
        #[arg(long)]
        action: Permission,
        /// Print the verdict as JSON.
        #[arg(long)]
        json: bool,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see each resolution, RUST_LOG=trace for every step.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::RunAll => {
            print_banner();
            run_all()
        }
        Command::Newsroom => {
            print_banner();
            newsroom::run_scenario()
        }
        Command::Website => {
            print_banner();
            website::run_scenario()
        }
        Command::Sections => {
            print_banner();
            sections::run_scenario()
        }
        Command::Check {
            policy,
            entity,
            resource,
            action,
            json,
        } => run_check(&policy, &entity, &resource, action, json),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

fn run_all() -> ArborResult<()> {
    newsroom::run_scenario()?;
    website::run_scenario()?;
    sections::run_scenario()?;
    println!("All scenarios completed successfully.");
    Ok(())
}

fn run_check(
    policy: &Path,
    entity: &str,
    resource: &str,
    action: Permission,
    as_json: bool,
) -> ArborResult<()> {
    let graph = PolicyGraph::from_file(policy)?;
    let verdict = graph.explain_by_id(entity, resource, action)?;
    debug!(entity, resource, %action, allowed = verdict.is_allowed(), "check");

    if as_json {
        let out = json!({
            "entity": entity,
            "resource": resource,
            "action": action,
            "allowed": verdict.is_allowed(),
            "detail": verdict,
        });
        println!("{:#}", out);
    } else {
        println!(
            "{} {} {}: {}",
            entity,
            action,
            resource,
            describe(graph.access(), &verdict)
        );
    }
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("arbor — Hierarchical Permission Resolution");
    println!("Website Reference Demo");
    println!("==========================================");
    println!();
    println!("Resolution order per query (entity, resource, action):");
    println!("  [1] Entity owns the resource                      → allow");
    println!("  [2] Explicit decision for the action on the pair  → allow / deny");
    println!("  [3] ALL = allow on the pair                       → allow");
    println!("  [4] Any parent entity grants, in insertion order  → allow");
    println!("  [5] The parent resource grants                    → allow");
    println!("  [6] Otherwise                                     → deny");
    println!();
}
