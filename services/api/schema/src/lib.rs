//! sea-orm entities for the PerkStack API database.

pub mod claims;
pub mod deals;
pub mod users;
