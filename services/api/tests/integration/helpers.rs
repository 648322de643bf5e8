use std::sync::{Arc, Mutex};

use chrono::Utc;

use perkstack_api::domain::repository::{
    ClaimRepository, DealRepository, PasswordPort, UserRepository,
};
use perkstack_api::domain::types::{
    Claim, ClaimWithDeal, Deal, DealFilter, DealSummary, User,
};
use perkstack_api::error::ApiError;
use perkstack_domain::id::{DealId, UserId};
use perkstack_domain::user::UserRole;

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user() -> User {
    let now = Utc::now();
    User {
        id: UserId::new(),
        name: "Ada Founder".to_owned(),
        email: "ada@startup.io".to_owned(),
        password_hash: FakePasswords::hash_of("correct-horse"),
        role: UserRole::User,
        verification: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_deal(title: &str, category: &str, is_locked: bool) -> Deal {
    let now = Utc::now();
    Deal {
        id: DealId::new(),
        title: title.to_owned(),
        description: format!("{title} for startups"),
        partner_name: title.to_owned(),
        logo_url: None,
        conditions: None,
        is_locked,
        category: category.to_owned(),
        partner_link: None,
        discount_value: Some("50% Off".to_owned()),
        created_at: now,
        updated_at: now,
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<bool, ApiError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        users.push(user.clone());
        Ok(true)
    }
}

// ── MockDealRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockDealRepo {
    pub deals: Arc<Mutex<Vec<Deal>>>,
}

impl MockDealRepo {
    pub fn new(deals: Vec<Deal>) -> Self {
        Self {
            deals: Arc::new(Mutex::new(deals)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn deals_handle(&self) -> Arc<Mutex<Vec<Deal>>> {
        Arc::clone(&self.deals)
    }
}

impl DealRepository for MockDealRepo {
    async fn list(&self, filter: &DealFilter) -> Result<Vec<Deal>, ApiError> {
        let needle = filter.search.as_ref().map(|s| s.to_lowercase());
        Ok(self
            .deals
            .lock()
            .unwrap()
            .iter()
            .filter(|d| filter.category.as_ref().is_none_or(|c| &d.category == c))
            .filter(|d| {
                needle.as_ref().is_none_or(|n| {
                    d.title.to_lowercase().contains(n) || d.partner_name.to_lowercase().contains(n)
                })
            })
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DealId) -> Result<Option<Deal>, ApiError> {
        Ok(self.deals.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let mut categories: Vec<String> = self
            .deals
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn replace_all(&self, catalog: &[Deal]) -> Result<u64, ApiError> {
        let mut deals = self.deals.lock().unwrap();
        *deals = catalog.to_vec();
        Ok(deals.len() as u64)
    }
}

// ── MockClaimRepo ────────────────────────────────────────────────────────────

/// Stored claim plus the lock scope it was inserted with.
pub type StoredClaim = (Claim, Option<DealId>);

/// Enforces the `(user_id, lock_scope)` uniqueness of the real table under
/// one lock, so concurrent inserts race the same way they do in Postgres.
#[derive(Clone)]
pub struct MockClaimRepo {
    pub claims: Arc<Mutex<Vec<StoredClaim>>>,
    pub deals: MockDealRepo,
}

impl MockClaimRepo {
    pub fn new(deals: MockDealRepo) -> Self {
        Self {
            claims: Arc::new(Mutex::new(vec![])),
            deals,
        }
    }

    pub fn claims_handle(&self) -> Arc<Mutex<Vec<StoredClaim>>> {
        Arc::clone(&self.claims)
    }
}

impl ClaimRepository for MockClaimRepo {
    async fn insert(&self, claim: &Claim, lock_scope: Option<DealId>) -> Result<bool, ApiError> {
        let mut claims = self.claims.lock().unwrap();
        if let Some(scope) = lock_scope {
            let taken = claims
                .iter()
                .any(|(c, s)| c.user_id == claim.user_id && *s == Some(scope));
            if taken {
                return Ok(false);
            }
        }
        claims.push((claim.clone(), lock_scope));
        Ok(true)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<ClaimWithDeal>, ApiError> {
        let claims: Vec<Claim> = self
            .claims
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c.user_id == user_id)
            .map(|(c, _)| c.clone())
            .collect();
        let deals = self.deals.deals.lock().unwrap();
        Ok(claims
            .into_iter()
            .map(|claim| {
                let deal = deals
                    .iter()
                    .find(|d| d.id == claim.deal_id)
                    .cloned()
                    .map(DealSummary::from);
                ClaimWithDeal { claim, deal }
            })
            .collect())
    }
}

// ── FakePasswords ────────────────────────────────────────────────────────────

/// Reversible stand-in for Argon2 so use-case tests stay fast.
#[derive(Clone, Default)]
pub struct FakePasswords;

impl FakePasswords {
    pub fn hash_of(password: &str) -> String {
        format!("fake-hash:{password}")
    }
}

impl PasswordPort for FakePasswords {
    async fn hash(&self, password: &str) -> Result<String, ApiError> {
        Ok(Self::hash_of(password))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, ApiError> {
        Ok(Self::hash_of(password) == hash)
    }
}
