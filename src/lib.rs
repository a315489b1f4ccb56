//! boxplan - Dev VM Provisioning Plan Compiler Library
//!
//! Turns a declarative description of a development VM (box, networks,
//! folders, sites, databases, tooling) into an ordered, idempotent list of
//! provisioning directives for a virtualization host to apply.

pub mod cli;
pub mod config;
pub mod plan;
pub mod utils;

// Re-export commonly used types
pub use config::schema::Settings;
pub use plan::compiler::compile;
pub use plan::directive::{Capabilities, Directive, Plan, Provider};

/// Library error type
pub type Result<T> = anyhow::Result<T>;
