//! Prepares the portal database: loads configuration, opens the pool and
//! ensures the schema. Exits non-zero on any startup failure.

use dotenvy::dotenv;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zgenai_portal::{db, Config};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    // Load environment variables from .env file if present
    dotenv().ok();

    let config = Config::from_env();
    info!(env = %config.env, port = %config.port, "configuration loaded");

    if let Err(e) = run(&config).await {
        error!(error = %e, "startup failed");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> zgenai_portal::Result<()> {
    config.ensure_secure()?;
    let conn = db::connect(&config.database_url, &config.pool).await?;
    db::ensure_schema(&conn).await?;
    info!("database ready");
    Ok(())
}
