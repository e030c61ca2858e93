use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub type ConnectionPool = Pool<Sqlite>;

pub struct ConnectionManager;

impl ConnectionManager {
    /// File-backed pool; the database file is created on first start.
    pub async fn new_pool(database_path: &str) -> anyhow::Result<ConnectionPool> {
        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {err}"))?;

        Ok(pool)
    }

    /// In-memory pool for the test suites. Capped at one connection: every
    /// pooled handle must see the same in-memory database.
    pub async fn new_memory_pool() -> anyhow::Result<ConnectionPool> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create in-memory pool: {err}"))?;

        Ok(pool)
    }
}
