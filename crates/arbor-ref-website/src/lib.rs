//! # arbor-ref-website
//!
//! Website reference scenarios for the arbor permission engine.
//!
//! Three scenarios, each building a permission graph from fixed fixtures and
//! printing a table of decisions:
//!
//! 1. **Newsroom**: users and groups wired by hand through the core API,
//!    showing group inheritance and a user-level explicit deny.
//! 2. **Website**: a nested resource tree with owners, loaded from the
//!    sample TOML policy, with provenance for selected decisions.
//! 3. **Sections**: the flat user/group/section façade with per-section
//!    defaults and personal permission sets.
//!
//! All data is hardcoded and fictional.

pub mod report;
pub mod scenarios;
