#![allow(async_fn_in_trait)]

use perkstack_domain::id::{DealId, UserId};

use crate::domain::types::{Claim, ClaimWithDeal, Deal, DealFilter, User};
use crate::error::ApiError;

/// Repository for registered accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ApiError>;

    /// Look up by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Insert a new account. Returns `false` if the email is already taken.
    async fn create(&self, user: &User) -> Result<bool, ApiError>;
}

/// Read side of the deal catalog plus the bulk replace used by seeding.
pub trait DealRepository: Send + Sync {
    /// Deals matching `filter`, in insertion order.
    async fn list(&self, filter: &DealFilter) -> Result<Vec<Deal>, ApiError>;

    async fn find_by_id(&self, id: DealId) -> Result<Option<Deal>, ApiError>;

    /// Distinct categories, sorted.
    async fn categories(&self) -> Result<Vec<String>, ApiError>;

    /// Delete every deal (claims cascade) and insert `catalog`, atomically.
    /// Returns the number of inserted deals.
    async fn replace_all(&self, catalog: &[Deal]) -> Result<u64, ApiError>;
}

/// Repository for claims.
pub trait ClaimRepository: Send + Sync {
    /// Insert a claim.
    ///
    /// With `lock_scope = Some(deal)`, at most one claim per (user, deal) may
    /// exist; the check and the write are a single atomic insert. Returns
    /// `false` (and writes nothing) when that slot is already taken.
    /// `None` never conflicts.
    async fn insert(&self, claim: &Claim, lock_scope: Option<DealId>) -> Result<bool, ApiError>;

    /// All claims of a user with their deals, in insertion order.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<ClaimWithDeal>, ApiError>;
}

/// Port for one-way password hashing.
pub trait PasswordPort: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, ApiError>;

    /// Returns `false` for a wrong password; errors only on a corrupt hash.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, ApiError>;
}
