use anyhow::Context as _;
use chrono::Utc;
use rand::RngExt;
use tracing::{debug, info};

use perkstack_domain::claim::{
    CLAIM_CODE_CHARSET, CLAIM_CODE_SUFFIX_LEN, ClaimCode, ClaimStatus,
};
use perkstack_domain::id::{ClaimId, DealId, UserId};

use crate::domain::repository::{ClaimRepository, DealRepository};
use crate::domain::types::{Claim, ClaimWithDeal};
use crate::error::ApiError;

/// Fresh `CLAIM-XXXXXXXXX` code. Codes are not deduplicated.
pub fn generate_claim_code() -> Result<ClaimCode, ApiError> {
    let mut rng = rand::rng();
    let suffix: String = (0..CLAIM_CODE_SUFFIX_LEN)
        .map(|_| CLAIM_CODE_CHARSET[rng.random_range(0..CLAIM_CODE_CHARSET.len())] as char)
        .collect();
    let code = ClaimCode::from_suffix(&suffix).context("generate claim code")?;
    Ok(code)
}

// ── ClaimDeal ────────────────────────────────────────────────────────────────

pub struct ClaimDealUseCase<D: DealRepository, C: ClaimRepository> {
    pub deals: D,
    pub claims: C,
}

impl<D: DealRepository, C: ClaimRepository> ClaimDealUseCase<D, C> {
    pub async fn execute(&self, user_id: UserId, deal_id: DealId) -> Result<Claim, ApiError> {
        let deal = self
            .deals
            .find_by_id(deal_id)
            .await?
            .ok_or(ApiError::DealNotFound)?;

        let now = Utc::now();
        let claim = Claim {
            id: ClaimId::new(),
            user_id,
            deal_id: deal.id,
            status: ClaimStatus::Approved,
            code: generate_claim_code()?,
            created_at: now,
            updated_at: now,
        };

        let lock_scope = deal.is_locked.then_some(deal.id);
        if !self.claims.insert(&claim, lock_scope).await? {
            debug!(%user_id, %deal_id, "locked deal already claimed");
            return Err(ApiError::AlreadyClaimed);
        }

        info!(
            claim_id = %claim.id,
            %user_id,
            %deal_id,
            locked = deal.is_locked,
            "deal claimed"
        );
        Ok(claim)
    }
}

// ── ListClaims ───────────────────────────────────────────────────────────────

pub struct ListClaimsUseCase<C: ClaimRepository> {
    pub claims: C,
}

impl<C: ClaimRepository> ListClaimsUseCase<C> {
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<ClaimWithDeal>, ApiError> {
        self.claims.list_by_user(user_id).await
    }
}
