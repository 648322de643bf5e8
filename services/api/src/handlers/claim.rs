use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use perkstack_auth_types::identity::Identity;
use perkstack_domain::claim::{ClaimCode, ClaimStatus};
use perkstack_domain::id::{ClaimId, DealId, UserId};

use crate::domain::types::{Claim, ClaimWithDeal, DealSummary};
use crate::error::ApiError;
use crate::handlers::deal::parse_deal_id;
use crate::state::AppState;
use crate::usecase::claim::{ClaimDealUseCase, ListClaimsUseCase};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub user_id: UserId,
    pub deal_id: DealId,
    pub status: ClaimStatus,
    pub claim_code: ClaimCode,
    #[serde(serialize_with = "perkstack_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "perkstack_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(c: Claim) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            deal_id: c.deal_id,
            status: c.status,
            claim_code: c.code,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedDealResponse {
    pub id: DealId,
    pub title: String,
    pub partner_name: String,
    pub logo_url: Option<String>,
    pub category: String,
    pub discount_value: Option<String>,
}

impl From<DealSummary> for ClaimedDealResponse {
    fn from(d: DealSummary) -> Self {
        Self {
            id: d.id,
            title: d.title,
            partner_name: d.partner_name,
            logo_url: d.logo_url,
            category: d.category,
            discount_value: d.discount_value,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimWithDealResponse {
    #[serde(flatten)]
    pub claim: ClaimResponse,
    pub deal: Option<ClaimedDealResponse>,
}

impl From<ClaimWithDeal> for ClaimWithDealResponse {
    fn from(c: ClaimWithDeal) -> Self {
        Self {
            claim: c.claim.into(),
            deal: c.deal.map(Into::into),
        }
    }
}

// ── POST /api/deals/{id}/claim ───────────────────────────────────────────────

pub async fn claim_deal(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let deal_id = parse_deal_id(&id)?;
    let usecase = ClaimDealUseCase {
        deals: state.deal_repo(),
        claims: state.claim_repo(),
    };
    let claim = usecase.execute(identity.user_id, deal_id).await?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

// ── GET /api/deals/user/claims ───────────────────────────────────────────────

pub async fn list_my_claims(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimWithDealResponse>>, ApiError> {
    let usecase = ListClaimsUseCase {
        claims: state.claim_repo(),
    };
    let claims = usecase.execute(identity.user_id).await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}
