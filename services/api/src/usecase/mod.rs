pub mod auth;
pub mod claim;
pub mod deal;
pub mod seed;
