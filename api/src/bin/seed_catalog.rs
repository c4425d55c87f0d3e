use std::process::ExitCode;

use clap::Parser;
use mealplanner_api::{args::LogArgs, logger::init_logger};
use mealplanner_core::{
    domain::{
        catalog::services::{SeedReport, seed_catalog},
        common::{CatalogStoreConfig, entities::app_errors::CoreError},
    },
    infrastructure::catalog::{StaticCatalogRepository, SupabaseCatalogStore},
};
use tracing::{error, info};

/// Replaces the remote food table with the built-in catalog.
#[derive(Debug, Parser)]
#[command(name = "seed-catalog", version)]
struct SeedArgs {
    #[arg(long = "store-url", env = "SUPABASE_URL", name = "SUPABASE_URL")]
    url: String,

    #[arg(
        long = "store-key",
        env = "SUPABASE_KEY",
        name = "SUPABASE_KEY",
        hide_env_values = true
    )]
    key: String,

    #[arg(
        long = "store-table",
        env = "SUPABASE_TABLE",
        name = "SUPABASE_TABLE",
        default_value = "zimbabwe_foods"
    )]
    table: String,

    #[command(flatten)]
    log: LogArgs,
}

async fn run(args: SeedArgs) -> Result<SeedReport, CoreError> {
    let store = SupabaseCatalogStore::new(CatalogStoreConfig {
        base_url: args.url,
        api_key: args.key,
        table: args.table,
    })?;

    seed_catalog(&StaticCatalogRepository::default(), &store).await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args = SeedArgs::parse();
    init_logger(&args.log);

    match run(args).await {
        Ok(report) if report.is_success() => {
            info!("Seeded {} food items", report.inserted.len());
            ExitCode::SUCCESS
        }
        Ok(report) => {
            error!(
                "Seeding incomplete: {} inserted, {} failed",
                report.inserted.len(),
                report.failed.len()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Seeding aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
