use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use perkstack_api::config::ApiConfig;
use perkstack_api::router::build_router;
use perkstack_api::state::AppState;
use perkstack_api_migration::{Migrator, MigratorTrait};
use perkstack_auth_types::identity::JwtSecret;
use perkstack_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to run migrations");
        info!("migrations applied");
    }

    let state = AppState {
        db: Arc::new(db),
        jwt_secret: JwtSecret::new(config.jwt_secret),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
    info!("api stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
