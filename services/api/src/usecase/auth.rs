use chrono::Utc;
use tracing::info;

use perkstack_auth_types::token::issue_access_token;
use perkstack_domain::id::UserId;
use perkstack_domain::user::UserRole;

use crate::domain::repository::{PasswordPort, UserRepository};
use crate::domain::types::{User, normalize_email, validate_registration};
use crate::error::ApiError;

/// Signed-in session handed back by register and login.
#[derive(Debug)]
pub struct Session {
    pub user: User,
    pub token: String,
    /// Token expiry, unix seconds.
    pub token_exp: u64,
}

fn open_session(user: User, secret: &str) -> Result<Session, ApiError> {
    let (token, token_exp) = issue_access_token(user.id, user.role, secret)
        .map_err(|e| ApiError::Internal(e.into()))?;
    Ok(Session {
        user,
        token,
        token_exp,
    })
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUseCase<U: UserRepository, P: PasswordPort> {
    pub users: U,
    pub passwords: P,
    pub jwt_secret: String,
}

impl<U: UserRepository, P: PasswordPort> RegisterUseCase<U, P> {
    pub async fn execute(&self, input: RegisterInput) -> Result<Session, ApiError> {
        let email = normalize_email(&input.email);
        validate_registration(&input.name, &email, &input.password)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(ApiError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: input.name.trim().to_owned(),
            email,
            password_hash: self.passwords.hash(&input.password).await?,
            role: UserRole::User,
            verification: None,
            created_at: now,
            updated_at: now,
        };

        // Unique index on email catches a concurrent registration.
        if !self.users.create(&user).await? {
            return Err(ApiError::EmailAlreadyExists);
        }

        info!(user_id = %user.id, "user registered");
        open_session(user, &self.jwt_secret)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U: UserRepository, P: PasswordPort> {
    pub users: U,
    pub passwords: P,
    pub jwt_secret: String,
}

impl<U: UserRepository, P: PasswordPort> LoginUseCase<U, P> {
    pub async fn execute(&self, input: LoginInput) -> Result<Session, ApiError> {
        let email = normalize_email(&input.email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if !self
            .passwords
            .verify(&input.password, &user.password_hash)
            .await?
        {
            return Err(ApiError::InvalidCredentials);
        }

        open_session(user, &self.jwt_secret)
    }
}

// ── GetMe ────────────────────────────────────────────────────────────────────

pub struct GetMeUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetMeUseCase<U> {
    pub async fn execute(&self, user_id: UserId) -> Result<User, ApiError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}
