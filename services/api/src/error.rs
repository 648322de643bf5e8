use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service error variants.
///
/// Rendered as `{"kind": ..., "error": ...}`; clients show `error` verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Deal not found")]
    DealNotFound,
    #[error("User not found")]
    UserNotFound,
    #[error("Already claimed")]
    AlreadyClaimed,
    #[error("Email already exists")]
    EmailAlreadyExists,
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("Forbidden")]
    Forbidden,
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DealNotFound => "DEAL_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::AlreadyClaimed => "ALREADY_CLAIMED",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::DealNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyClaimed
            | Self::EmailAlreadyExists
            | Self::InvalidCredentials
            | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // TraceLayer records every status; 4xx are expected client errors.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}
