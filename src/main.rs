use std::sync::Arc;

use classdesk_api::config::ApiConfig;
use classdesk_db::{create_pool, schema::initialize_database, store::PgClassScheduleStore};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Start API server
    let store = Arc::new(PgClassScheduleStore::new(db_pool));
    classdesk_api::start_server(config, store).await?;

    Ok(())
}
