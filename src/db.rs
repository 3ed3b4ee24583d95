use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

/// Seed login used by the deployed instance. The table carries no
/// uniqueness constraint, so seeding only happens into an empty table.
const SEED_USERNAME: &str = "Naveen123";
const SEED_NAME: &str = "Naveen";
const SEED_PHONE: i64 = 1234567890;
const SEED_PASSWORD: &str = "aaa";

pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("parse database url {database_url}"))?
        .create_if_missing(true);

    let db = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("connect to database")?;
    Ok(db)
}

pub async fn ensure_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS credentials (
            username TEXT NOT NULL,
            name     TEXT NOT NULL,
            phone    INTEGER NOT NULL,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await
    .context("create credentials table")?;
    Ok(())
}

pub async fn seed_credentials(db: &SqlitePool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM credentials")
        .fetch_one(db)
        .await?;
    if count > 0 {
        return Ok(());
    }

    sqlx::query("INSERT INTO credentials (username, name, phone, password) VALUES (?1, ?2, ?3, ?4)")
        .bind(SEED_USERNAME)
        .bind(SEED_NAME)
        .bind(SEED_PHONE)
        .bind(SEED_PASSWORD)
        .execute(db)
        .await
        .context("insert seed credential")?;
    tracing::info!(username = SEED_USERNAME, "seeded credentials table");
    Ok(())
}

/// In-memory pool with schema and seed row, for tests. A single connection
/// keeps every query on the same `:memory:` database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    ensure_schema(&db).await.expect("schema");
    seed_credentials(&db).await.expect("seed");
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let db = test_pool().await;
        seed_credentials(&db).await.expect("second seed");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM credentials")
            .fetch_one(&db)
            .await
            .expect("count");
        assert_eq!(count, 1);
    }
}
