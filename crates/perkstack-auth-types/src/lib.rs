//! Auth types shared across PerkStack crates.
//!
//! Provides JWT issuing/validation and the `Identity` bearer-token extractor.

pub mod identity;
pub mod token;
