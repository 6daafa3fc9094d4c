//! Interactive CLI interface (feature-gated)

pub mod prompts;

pub use prompts::{run, CreateArgs};
