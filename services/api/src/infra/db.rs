use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};

use perkstack_api_schema::{claims, deals, users};
use perkstack_core::sea_ext::ContainsIgnoreCase;
use perkstack_domain::id::{DealId, UserId};
use perkstack_domain::user::UserRole;

use crate::domain::repository::{ClaimRepository, DealRepository, UserRepository};
use crate::domain::types::{
    Claim, ClaimWithDeal, Deal, DealFilter, DealSummary, User, Verification,
};
use crate::error::ApiError;

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id.0)
            .one(self.db.as_ref())
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<bool, ApiError> {
        let verification = user.verification.unwrap_or(Verification {
            verified: false,
            verified_at: None,
        });
        let result = users::ActiveModel {
            id: Set(user.id.0),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(i16::from(user.role.as_u8())),
            verified: Set(verification.verified),
            verified_at: Set(verification.verified_at),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(self.db.as_ref())
        .await;
        match result {
            Ok(_) => Ok(true),
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiError> {
    let role = u8::try_from(model.role)
        .ok()
        .and_then(UserRole::from_u8)
        .with_context(|| format!("unknown role {} for user {}", model.role, model.id))?;
    let verification = (model.verified || model.verified_at.is_some()).then_some(Verification {
        verified: model.verified,
        verified_at: model.verified_at,
    });
    Ok(User {
        id: model.id.into(),
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        role,
        verification,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Deal repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDealRepository {
    pub db: Arc<DatabaseConnection>,
}

impl DealRepository for DbDealRepository {
    async fn list(&self, filter: &DealFilter) -> Result<Vec<Deal>, ApiError> {
        let mut query = deals::Entity::find();
        if let Some(category) = &filter.category {
            query = query.filter(deals::Column::Category.eq(category.as_str()));
        }
        if let Some(search) = &filter.search {
            query = query.contains_ignore_case(
                &[deals::Column::Title, deals::Column::PartnerName],
                search,
            );
        }
        let models = query
            .order_by_asc(deals::Column::CreatedAt)
            .order_by_asc(deals::Column::Id)
            .all(self.db.as_ref())
            .await
            .context("list deals")?;
        Ok(models.into_iter().map(deal_from_model).collect())
    }

    async fn find_by_id(&self, id: DealId) -> Result<Option<Deal>, ApiError> {
        let model = deals::Entity::find_by_id(id.0)
            .one(self.db.as_ref())
            .await
            .context("find deal by id")?;
        Ok(model.map(deal_from_model))
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let categories = deals::Entity::find()
            .select_only()
            .column(deals::Column::Category)
            .distinct()
            .order_by_asc(deals::Column::Category)
            .into_tuple::<String>()
            .all(self.db.as_ref())
            .await
            .context("list deal categories")?;
        Ok(categories)
    }

    async fn replace_all(&self, catalog: &[Deal]) -> Result<u64, ApiError> {
        let inserted = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                let catalog = catalog.to_vec();
                Box::pin(async move {
                    deals::Entity::delete_many().exec(txn).await?;
                    if catalog.is_empty() {
                        return Ok(0);
                    }
                    let models = catalog.iter().map(deal_to_active_model);
                    deals::Entity::insert_many(models)
                        .exec_without_returning(txn)
                        .await
                })
            })
            .await
            .context("replace deal catalog")?;
        Ok(inserted)
    }
}

fn deal_from_model(model: deals::Model) -> Deal {
    Deal {
        id: model.id.into(),
        title: model.title,
        description: model.description,
        partner_name: model.partner_name,
        logo_url: model.logo_url,
        conditions: model.conditions,
        is_locked: model.is_locked,
        category: model.category,
        partner_link: model.partner_link,
        discount_value: model.discount_value,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn deal_to_active_model(deal: &Deal) -> deals::ActiveModel {
    deals::ActiveModel {
        id: Set(deal.id.0),
        title: Set(deal.title.clone()),
        description: Set(deal.description.clone()),
        partner_name: Set(deal.partner_name.clone()),
        logo_url: Set(deal.logo_url.clone()),
        conditions: Set(deal.conditions.clone()),
        is_locked: Set(deal.is_locked),
        category: Set(deal.category.clone()),
        partner_link: Set(deal.partner_link.clone()),
        discount_value: Set(deal.discount_value.clone()),
        created_at: Set(deal.created_at),
        updated_at: Set(deal.updated_at),
    }
}

// ── Claim repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClaimRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ClaimRepository for DbClaimRepository {
    async fn insert(&self, claim: &Claim, lock_scope: Option<DealId>) -> Result<bool, ApiError> {
        // uq_claims_user_id_lock_scope turns a second locked claim into a
        // unique violation instead of a second row.
        let result = claims::ActiveModel {
            id: Set(claim.id.0),
            user_id: Set(claim.user_id.0),
            deal_id: Set(claim.deal_id.0),
            status: Set(claim.status.as_str().to_owned()),
            claim_code: Set(claim.code.as_str().to_owned()),
            lock_scope: Set(lock_scope.map(|d| d.0)),
            created_at: Set(claim.created_at),
            updated_at: Set(claim.updated_at),
        }
        .insert(self.db.as_ref())
        .await;
        match result {
            Ok(_) => Ok(true),
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("insert claim").into()),
        }
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<ClaimWithDeal>, ApiError> {
        let rows = claims::Entity::find()
            .filter(claims::Column::UserId.eq(user_id.0))
            .find_also_related(deals::Entity)
            .order_by_asc(claims::Column::CreatedAt)
            .order_by_asc(claims::Column::Id)
            .all(self.db.as_ref())
            .await
            .context("list claims by user")?;
        rows.into_iter()
            .map(|(claim, deal)| {
                Ok(ClaimWithDeal {
                    claim: claim_from_model(claim)?,
                    deal: deal.map(|d| DealSummary::from(deal_from_model(d))),
                })
            })
            .collect()
    }
}

fn claim_from_model(model: claims::Model) -> Result<Claim, ApiError> {
    let status = model
        .status
        .parse()
        .with_context(|| format!("claim {} status", model.id))?;
    let code = perkstack_domain::claim::ClaimCode::parse(&model.claim_code)
        .with_context(|| format!("claim {} code", model.id))?;
    Ok(Claim {
        id: model.id.into(),
        user_id: model.user_id.into(),
        deal_id: model.deal_id.into(),
        status,
        code,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
