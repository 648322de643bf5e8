use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use perkstack_auth_types::identity::Identity;
use perkstack_domain::id::DealId;

use crate::domain::types::{Deal, DealFilter};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::deal::{GetDealUseCase, ListCategoriesUseCase, ListDealsUseCase};
use crate::usecase::seed::SeedCatalogUseCase;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealResponse {
    pub id: DealId,
    pub title: String,
    pub description: String,
    pub partner_name: String,
    pub logo_url: Option<String>,
    pub conditions: Option<String>,
    pub is_locked: bool,
    pub category: String,
    pub partner_link: Option<String>,
    pub discount_value: Option<String>,
    #[serde(serialize_with = "perkstack_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "perkstack_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Deal> for DealResponse {
    fn from(d: Deal) -> Self {
        Self {
            id: d.id,
            title: d.title,
            description: d.description,
            partner_name: d.partner_name,
            logo_url: d.logo_url,
            conditions: d.conditions,
            is_locked: d.is_locked,
            category: d.category,
            partner_link: d.partner_link,
            discount_value: d.discount_value,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// Path ids that are not UUIDs cannot name a deal.
pub(crate) fn parse_deal_id(raw: &str) -> Result<DealId, ApiError> {
    raw.parse().map_err(|_| ApiError::DealNotFound)
}

// ── GET /api/deals ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ListDealsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

pub async fn list_deals(
    State(state): State<AppState>,
    Query(query): Query<ListDealsQuery>,
) -> Result<Json<Vec<DealResponse>>, ApiError> {
    let usecase = ListDealsUseCase {
        deals: state.deal_repo(),
    };
    let deals = usecase
        .execute(DealFilter {
            search: query.search,
            category: query.category,
        })
        .await?;
    Ok(Json(deals.into_iter().map(DealResponse::from).collect()))
}

// ── GET /api/deals/categories ────────────────────────────────────────────────

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let usecase = ListCategoriesUseCase {
        deals: state.deal_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── GET /api/deals/{id} ──────────────────────────────────────────────────────

pub async fn get_deal(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DealResponse>, ApiError> {
    let id = parse_deal_id(&id)?;
    let usecase = GetDealUseCase {
        deals: state.deal_repo(),
    };
    let deal = usecase.execute(id).await?;
    Ok(Json(deal.into()))
}

// ── POST /api/deals/seed ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
    pub count: u64,
}

pub async fn seed_catalog(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, ApiError> {
    if !identity.role.is_admin() {
        return Err(ApiError::Forbidden);
    }
    let usecase = SeedCatalogUseCase {
        deals: state.deal_repo(),
    };
    let count = usecase.execute().await?;
    Ok(Json(SeedResponse {
        message: "Seeded",
        count,
    }))
}
