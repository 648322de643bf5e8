//! Domain types shared across all PerkStack crates.
//!
//! Pure types with no framework dependencies: ids, roles, claim status and
//! redemption codes.

pub mod claim;
pub mod id;
pub mod user;
