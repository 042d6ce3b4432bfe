//! Startup DDL for the two catalog tables. Idempotent; applied on every boot.

use crate::error::AppError;
use sqlx::PgPool;

/// Sellers table. The password column is VARCHAR like the rest; hashing is a
/// known gap in the inherited contract, not to be fixed here silently.
const CREATE_SELLERS: &str = r#"
CREATE TABLE IF NOT EXISTS sellers (
    id BIGSERIAL PRIMARY KEY,
    first_name VARCHAR(50) NOT NULL,
    last_name VARCHAR(50) NOT NULL,
    email VARCHAR(50) NOT NULL,
    password VARCHAR(50) NOT NULL
)
"#;

/// Books table. The cascade keeps the "no orphaned books" invariant inside
/// the database, so seller deletion stays a single statement.
const CREATE_BOOKS: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id BIGSERIAL PRIMARY KEY,
    title VARCHAR(100) NOT NULL,
    author VARCHAR(100) NOT NULL,
    year INT NOT NULL,
    count_pages INT NOT NULL,
    seller_id BIGINT NOT NULL REFERENCES sellers(id) ON DELETE CASCADE
)
"#;

/// Apply the schema. Sellers first: books carry the foreign key.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in [CREATE_SELLERS, CREATE_BOOKS] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("schema migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn books_cascade_on_seller_delete() {
        assert!(CREATE_BOOKS.contains("ON DELETE CASCADE"));
        assert!(CREATE_BOOKS.contains("REFERENCES sellers(id)"));
    }

    #[test]
    fn seller_columns_are_capped_at_fifty() {
        for field in ["first_name", "last_name", "email", "password"] {
            assert!(CREATE_SELLERS.contains(&format!("{} VARCHAR(50) NOT NULL", field)));
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::connect_pool(&url, 2).await.expect("pool");
        apply_migrations(&pool).await.expect("first run");
        apply_migrations(&pool).await.expect("second run");
    }
}
