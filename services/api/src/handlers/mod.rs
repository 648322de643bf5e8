pub mod auth;
pub mod claim;
pub mod deal;
