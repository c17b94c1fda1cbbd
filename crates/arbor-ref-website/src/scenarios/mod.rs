//! Website reference scenarios.
//!
//! Each scenario is self-contained: it builds its own graph, prints what
//! the resolver decides, and returns an error only if a fixture fails to
//! load.

pub mod newsroom;
pub mod sections;
pub mod website;
