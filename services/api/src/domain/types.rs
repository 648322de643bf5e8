use chrono::{DateTime, Utc};

use perkstack_domain::claim::{ClaimCode, ClaimStatus};
use perkstack_domain::id::{ClaimId, DealId, UserId};
use perkstack_domain::user::UserRole;

use crate::error::ApiError;

/// Registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Argon2id PHC string. Never leaves the service.
    pub password_hash: String,
    pub role: UserRole,
    pub verification: Option<Verification>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Startup verification state of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
}

/// Partner offer in the catalog.
#[derive(Debug, Clone)]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    pub description: String,
    pub partner_name: String,
    pub logo_url: Option<String>,
    pub conditions: Option<String>,
    /// Locked deals may be claimed once per user.
    pub is_locked: bool,
    pub category: String,
    pub partner_link: Option<String>,
    pub discount_value: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display fields of a deal embedded in claim listings.
#[derive(Debug, Clone)]
pub struct DealSummary {
    pub id: DealId,
    pub title: String,
    pub partner_name: String,
    pub logo_url: Option<String>,
    pub category: String,
    pub discount_value: Option<String>,
}

impl From<Deal> for DealSummary {
    fn from(deal: Deal) -> Self {
        Self {
            id: deal.id,
            title: deal.title,
            partner_name: deal.partner_name,
            logo_url: deal.logo_url,
            category: deal.category,
            discount_value: deal.discount_value,
        }
    }
}

/// A user's redemption of a deal.
#[derive(Debug, Clone)]
pub struct Claim {
    pub id: ClaimId,
    pub user_id: UserId,
    pub deal_id: DealId,
    pub status: ClaimStatus,
    pub code: ClaimCode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Claim joined with its deal. `deal` is `None` only if the deal row vanished
/// between the two reads.
#[derive(Debug, Clone)]
pub struct ClaimWithDeal {
    pub claim: Claim,
    pub deal: Option<DealSummary>,
}

/// Optional narrowing of the deal listing.
#[derive(Debug, Clone, Default)]
pub struct DealFilter {
    /// Case-insensitive substring of title or partner name.
    pub search: Option<String>,
    /// Exact category.
    pub category: Option<String>,
}

impl DealFilter {
    /// Drop blank values so `?search=&category=` means "no filter".
    pub fn normalized(self) -> Self {
        fn non_blank(v: Option<String>) -> Option<String> {
            v.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
        }
        Self {
            search: non_blank(self.search),
            category: non_blank(self.category),
        }
    }
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Lowercase and trim an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check registration input. `email` must already be normalized.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::InvalidInput("name is required"));
    }
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !valid_email {
        return Err(ApiError::InvalidInput("email is invalid"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::InvalidInput(
            "password must be at least 8 characters",
        ));
    }
    Ok(())
}
