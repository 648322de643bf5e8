//! JWT access-token issuing and validation.

#[cfg(any(feature = "USE_ONLY_IN_TOKEN_ISSUER", test))]
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(any(feature = "USE_ONLY_IN_TOKEN_ISSUER", test))]
use jsonwebtoken::{EncodingKey, Header, encode};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "USE_ONLY_IN_TOKEN_ISSUER", test))]
use serde::Serialize;

use perkstack_domain::id::UserId;
use perkstack_domain::user::UserRole;

/// Access-token lifetime in seconds (7 days).
pub const ACCESS_TOKEN_EXP: u64 = 604_800;

/// User identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: UserId,
    pub role: UserRole,
    pub access_token_exp: u64,
}

/// Errors returned by [`validate_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload.
///
/// | Field | JWT claim | Rust type | Meaning |
/// |-------|-----------|-----------|---------|
/// | `sub` | `sub` | UUID string | user ID |
/// | `role` | custom | `u8` wire value | see [`UserRole`] |
/// | `exp` | `exp` | seconds since epoch | token expiration |
///
/// [`Serialize`] requires the **`USE_ONLY_IN_TOKEN_ISSUER`** cargo feature.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_TOKEN_ISSUER", test), derive(Serialize))]
pub struct JwtClaims {
    pub sub: String,
    pub role: u8,
    pub exp: u64,
}

#[cfg(any(feature = "USE_ONLY_IN_TOKEN_ISSUER", test))]
fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a bearer token, returning parsed identity.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let claims = decode_jwt(token, secret)?;
    let user_id = claims
        .sub
        .parse::<UserId>()
        .map_err(|_| AuthError::Malformed)?;
    let role = UserRole::from_u8(claims.role).ok_or(AuthError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        role,
        access_token_exp: claims.exp,
    })
}

/// Sign a new access token for the user. Returns the token and its `exp`.
#[cfg(any(feature = "USE_ONLY_IN_TOKEN_ISSUER", test))]
pub fn issue_access_token(
    user_id: UserId,
    role: UserRole,
    secret: &str,
) -> Result<(String, u64), jsonwebtoken::errors::Error> {
    let exp = now_secs() + ACCESS_TOKEN_EXP;
    let claims = JwtClaims {
        sub: user_id.to_string(),
        role: role.as_u8(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok((token, exp))
}
