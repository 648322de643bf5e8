use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use sea_orm::DatabaseConnection;

use crate::error::AppError;

/// Handler for `GET /healthz`: liveness.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz`: ready once the database answers a ping.
pub async fn readyz(State(db): State<Arc<DatabaseConnection>>) -> Result<StatusCode, AppError> {
    db.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "database ping failed");
        AppError::Unavailable
    })?;
    Ok(StatusCode::OK)
}
