use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use perkstack_auth_types::identity::Identity;
use perkstack_domain::id::UserId;
use perkstack_domain::user::UserRole;

use crate::domain::types::User;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::auth::{
    GetMeUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, Session,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResponse {
    pub verified: bool,
    #[serde(serialize_with = "perkstack_core::serde::to_rfc3339_ms_opt")]
    pub verified_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub verification: Option<VerificationResponse>,
    #[serde(serialize_with = "perkstack_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "perkstack_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            verification: u.verification.map(|v| VerificationResponse {
                verified: v.verified,
                verified_at: v.verified_at,
            }),
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserResponse,
    pub token: String,
    /// Unix seconds.
    pub token_exp: u64,
}

impl From<Session> for SessionResponse {
    fn from(s: Session) -> Self {
        Self {
            user: s.user.into(),
            token: s.token,
            token_exp: s.token_exp,
        }
    }
}

// ── POST /api/auth/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        passwords: state.passwords(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };
    let session = usecase
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        passwords: state.passwords(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };
    let session = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(session.into()))
}

// ── GET /api/auth/me ─────────────────────────────────────────────────────────

pub async fn me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetMeUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(user.into()))
}
