//! Configuration schemas and loading

pub mod loader;
pub mod local;
pub mod schema;
