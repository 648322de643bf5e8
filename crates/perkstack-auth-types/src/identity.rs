//! Bearer-token identity extractor.

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::StatusCode;
use http::request::Parts;

use perkstack_domain::id::UserId;
use perkstack_domain::user::UserRole;

use crate::token::validate_access_token;

/// HMAC secret used to validate bearer tokens.
///
/// Service state exposes it through `FromRef` so [`Identity`] can be extracted
/// from any router state.
#[derive(Clone)]
pub struct JwtSecret(Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret(..)")
    }
}

/// Authenticated caller, taken from `Authorization: Bearer <jwt>`.
///
/// Returns 401 if the header is absent or the token does not validate.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: UserId,
    pub role: UserRole,
}

/// Why a request carried no usable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityRejection {
    #[error("Authentication required")]
    Missing,
    #[error("Invalid token")]
    Invalid,
}

impl IdentityRejection {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "UNAUTHENTICATED",
            Self::Invalid => "INVALID_TOKEN",
        }
    }
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = IdentityRejection;

    // Validate synchronously and return a 'static future; `async fn` here trips
    // E0195 against axum-core's `impl Future + Send` signature.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = match parts.headers.typed_get::<Authorization<Bearer>>() {
            None => Err(IdentityRejection::Missing),
            Some(auth) => validate_access_token(auth.token(), secret.as_str())
                .map(|info| Self {
                    user_id: info.user_id,
                    role: info.role,
                })
                .map_err(|e| {
                    tracing::debug!(error = %e, "rejected bearer token");
                    IdentityRejection::Invalid
                }),
        };

        async move { result }
    }
}
