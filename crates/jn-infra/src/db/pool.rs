use anyhow::{Context, Result};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

/// Embed all diesel migrations at compile time
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for SQLite connection pool
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Create database connection pool and run migrations
///
/// This function should be called **once at application startup**.
///
/// Responsibilities:
/// - Build r2d2 connection pool with at most `max_size` connections
/// - Automatically run all pending Diesel migrations
///
/// Every `:memory:` connection is a separate database, so in-memory pools
/// must use `max_size = 1`.
pub fn init_db_pool(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(max_size.max(1))
        .build(manager)
        .with_context(|| format!("Failed to create database pool for {}", database_url))?;

    run_migrations(&pool)?;

    Ok(pool)
}

/// Run embedded Diesel migrations
fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;

    info!("Running database migrations...");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    info!("Database migrations completed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_db_pool_creates_file_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.db");

        let pool = init_db_pool(path.to_str().unwrap(), 2).unwrap();

        assert!(path.exists());
        assert_eq!(pool.max_size(), 2);
    }

    #[test]
    fn test_init_db_pool_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.db");
        let url = path.to_str().unwrap();

        init_db_pool(url, 1).unwrap();
        init_db_pool(url, 1).unwrap();
    }

    #[test]
    fn test_zero_pool_size_is_raised_to_one() {
        let pool = init_db_pool(":memory:", 0).unwrap();
        assert_eq!(pool.max_size(), 1);
    }
}
