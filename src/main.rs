use dotenvy::dotenv;
use shopbot_db::config::catalog::{Catalog, load_catalog};
use shopbot_db::config::database::{DbConfig, connect, create_tables};
use shopbot_db::core::seed::seed_catalog;
use shopbot_db::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also come from the real environment
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connection parameters
    let db_config = DbConfig::from_env()
        .inspect_err(|e| error!("Invalid database configuration: {}", e))?;

    // 4. Connect and make sure the schema exists
    let db = connect(&db_config)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    create_tables(&db)
        .await
        .inspect(|_| info!("Database schema ready."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed the catalog
    let catalog = match std::env::var("SEED_CATALOG") {
        Ok(path) => {
            info!("Loading seed catalog from {}", path);
            load_catalog(&path)
                .inspect_err(|e| error!("Failed to load seed catalog: {}", e))?
        }
        Err(_) => Catalog::builtin(),
    };
    seed_catalog(&db, &catalog)
        .await
        .inspect(|summary| info!(?summary, "Catalog seeded successfully."))
        .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;

    Ok(())
}
