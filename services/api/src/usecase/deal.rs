use perkstack_domain::id::DealId;

use crate::domain::repository::DealRepository;
use crate::domain::types::{Deal, DealFilter};
use crate::error::ApiError;

// ── ListDeals ────────────────────────────────────────────────────────────────

pub struct ListDealsUseCase<D: DealRepository> {
    pub deals: D,
}

impl<D: DealRepository> ListDealsUseCase<D> {
    pub async fn execute(&self, filter: DealFilter) -> Result<Vec<Deal>, ApiError> {
        self.deals.list(&filter.normalized()).await
    }
}

// ── GetDeal ──────────────────────────────────────────────────────────────────

pub struct GetDealUseCase<D: DealRepository> {
    pub deals: D,
}

impl<D: DealRepository> GetDealUseCase<D> {
    pub async fn execute(&self, id: DealId) -> Result<Deal, ApiError> {
        self.deals
            .find_by_id(id)
            .await?
            .ok_or(ApiError::DealNotFound)
    }
}

// ── ListCategories ───────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<D: DealRepository> {
    pub deals: D,
}

impl<D: DealRepository> ListCategoriesUseCase<D> {
    pub async fn execute(&self) -> Result<Vec<String>, ApiError> {
        self.deals.categories().await
    }
}
