//! Provisioning plan compiler stages

pub mod compiler;
pub mod directive;
pub mod extras;
pub mod folders;
pub mod network;
pub mod normalize;
pub mod sites;
