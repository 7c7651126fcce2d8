use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DB_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Migrations directory (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or migrations fail
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let mut config = DatabaseConfig::new(db_url);
    if let Ok(raw) = env::var("DB_MAX_CONNECTIONS") {
        let max_connections = raw
            .parse::<u32>()
            .with_context(|| format!("DB_MAX_CONNECTIONS is not a number: {raw}"))?;
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;
    tracing::info!("Database connected");

    let migrations_path = env::var("MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());
    run_migrations(&pool, &migrations_path).await?;
    tracing::info!("Migrations applied from {}", migrations_path);

    Ok(pool)
}
