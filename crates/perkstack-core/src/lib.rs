//! Service plumbing shared by PerkStack binaries: tracing, health checks,
//! HTTP layers, env config helpers and small sea-orm extensions.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
