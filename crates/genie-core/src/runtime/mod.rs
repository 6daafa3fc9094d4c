//! Runtime requirement checks
//!
//! Verifies that Node.js and npm are installed at or above the minimum
//! supported versions before any scaffolding happens.

pub mod check;

pub use check::{verify_node, verify_npm, verify_runtimes, RuntimeInfo};
