//! Chi Combat - deterministic turn-based combat resolver

pub mod abilities;
pub mod combat;
pub mod core;
pub mod fighter;
pub mod session;
