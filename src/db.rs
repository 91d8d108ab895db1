//! Connection pool and schema bootstrap.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::config::PoolOptions;
use crate::error::{Error, Result};
use crate::migration::Migrator;

/// Opens a bounded pool and checks that the server answers.
///
/// An empty `database_url` is rejected before any network attempt. Parse and
/// connection failures are returned as-is; nothing is retried.
///
/// # Examples
///
/// ```no_run
/// use zgenai_portal::{db, Config};
///
/// # async fn example() -> zgenai_portal::Result<()> {
/// let config = Config::from_env();
/// let conn = db::connect(&config.database_url, &config.pool).await?;
/// db::ensure_schema(&conn).await?;
/// # Ok(())
/// # }
/// ```
pub async fn connect(database_url: &str, options: &PoolOptions) -> Result<DatabaseConnection> {
    if database_url.is_empty() {
        return Err(Error::MissingDatabaseUrl);
    }

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(options.max_connections)
        .min_connections(options.min_connections)
        .connect_timeout(options.connect_timeout)
        .acquire_timeout(options.connect_timeout)
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(Error::Connect)?;
    debug!(
        max = options.max_connections,
        min = options.min_connections,
        "connection pool created"
    );

    match tokio::time::timeout(options.connect_timeout, conn.ping()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(Error::Ping(e)),
        Err(_) => return Err(Error::PingTimeout(options.connect_timeout)),
    }

    info!("connected to database");
    Ok(conn)
}

/// Creates every table and index that does not exist yet.
///
/// Safe to call on every start: each step is `IF NOT EXISTS`, and steps the
/// migrator has already recorded are skipped. Existing tables are never
/// altered.
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<()> {
    Migrator::up(conn, None).await.map_err(Error::Schema)?;
    info!("database schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_url_fails_before_connecting() {
        let err = connect("", &PoolOptions::default()).await.unwrap_err();
        assert!(matches!(err, Error::MissingDatabaseUrl));
        assert_eq!(err.to_string(), "DATABASE_URL is required");
    }

    #[tokio::test]
    async fn malformed_url_is_a_connect_error() {
        let err = connect("not a database url", &PoolOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Connect(_)), "got {err:?}");
    }
}
