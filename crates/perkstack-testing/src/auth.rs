//! Bearer-token helpers for integration tests.
//!
//! `MockAuth` signs a real access token with the test secret so requests pass
//! through the same `Identity` extractor production traffic does.

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};

use perkstack_auth_types::token::issue_access_token;
use perkstack_domain::id::UserId;
use perkstack_domain::user::UserRole;

/// Secret shared by test routers and [`MockAuth`].
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: UserId,
    pub role: UserRole,
}

impl MockAuth {
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn user() -> Self {
        Self::new(UserId::new(), UserRole::User)
    }

    pub fn admin() -> Self {
        Self::new(UserId::new(), UserRole::Admin)
    }

    /// Signed access token for this identity.
    pub fn token(&self) -> String {
        issue_access_token(self.user_id, self.role, TEST_JWT_SECRET)
            .expect("sign test token")
            .0
    }

    /// `Authorization: Bearer <token>` header pair.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.token()))
            .expect("token is a valid header value");
        (AUTHORIZATION, value)
    }
}
