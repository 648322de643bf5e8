use perkstack_core::config::{env_or, required_env};

/// API service configuration loaded from environment variables.
pub struct ApiConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing access tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 5000). Env var: `API_PORT`.
    pub api_port: u16,
    /// Apply pending migrations at startup (default true). Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: required_env("DATABASE_URL"),
            jwt_secret: required_env("JWT_SECRET"),
            api_port: env_or("API_PORT", 5000),
            run_migrations: env_or("RUN_MIGRATIONS", true),
        }
    }
}
