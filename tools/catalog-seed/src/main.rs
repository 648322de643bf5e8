//! Catalog seeder: replaces the deal catalog with the fixed partner deals.
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/perkstack cargo run -p catalog-seed
//! cargo run -p catalog-seed -- --database-url postgres://... --skip-migrations
//! ```
//!
//! Every existing deal, and every claim on it, is deleted.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use sea_orm::Database;
use tracing::info;

use perkstack_api::infra::db::DbDealRepository;
use perkstack_api::usecase::seed::SeedCatalogUseCase;
use perkstack_api_migration::{Migrator, MigratorTrait};
use perkstack_core::tracing::init_tracing;

#[derive(Parser)]
#[command(about = "Seed the deal catalog with the partner deals")]
struct Args {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Do not apply pending migrations before seeding
    #[arg(long)]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let db = Database::connect(&args.database_url)
        .await
        .context("connect to database")?;

    if !args.skip_migrations {
        Migrator::up(&db, None).await.context("run migrations")?;
        info!("migrations applied");
    }

    let usecase = SeedCatalogUseCase {
        deals: DbDealRepository { db: Arc::new(db) },
    };
    let count = usecase.execute().await.context("seed catalog")?;

    println!("Seeded {count} deal(s)");
    Ok(())
}
