use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use perkstack_auth_types::identity::JwtSecret;

use crate::infra::db::{DbClaimRepository, DbDealRepository, DbUserRepository};
use crate::infra::password::Argon2Passwords;

/// Shared application state passed to every handler via axum `State`.
///
/// `FromRef` lets `readyz` take the connection and `Identity` take the secret
/// without knowing about this type. The connection is shared behind `Arc`
/// because sea-orm's mock connection is not `Clone`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn deal_repo(&self) -> DbDealRepository {
        DbDealRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn claim_repo(&self) -> DbClaimRepository {
        DbClaimRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn passwords(&self) -> Argon2Passwords {
        Argon2Passwords
    }
}
