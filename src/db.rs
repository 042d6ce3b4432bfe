//! Connection pool construction and database bootstrap.

use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Create the PostgreSQL connection pool.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create the target database when absent. Connects to the admin `postgres`
/// database on the same server; a URL already pointing at `postgres` is a
/// no-op.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_db_name(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

/// Split a connection URL into (admin URL, database name).
fn split_db_name(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no database path".into()))?
        + 1;
    let tail = url.get(path_start..).unwrap_or("");
    let db_name = tail.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_plain_url() {
        let (admin, name) = split_db_name("postgres://localhost/bookstore").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres");
        assert_eq!(name, "bookstore");
    }

    #[test]
    fn split_url_with_query() {
        let (admin, name) =
            split_db_name("postgres://user:pw@db:5432/bookstore?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://user:pw@db:5432/postgres");
        assert_eq!(name, "bookstore");
    }

    #[test]
    fn admin_database_is_left_alone() {
        let (_, name) = split_db_name("postgres://localhost/postgres").unwrap();
        assert_eq!(name, "postgres");
    }

    // Pool tests need a live server.
    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect_pool(&url, 2).await.expect("pool creation failed");
        let row: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(row.0, 1);
    }
}
