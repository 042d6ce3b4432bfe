//! Seller storage operations.

use sqlx::PgPool;

use crate::error::AppError;
use crate::models::sellers::{CreateSeller, Seller, UpdateSeller};

pub struct SellerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SellerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a seller; the database assigns the id.
    pub async fn create(&self, payload: &CreateSeller) -> Result<Seller, AppError> {
        let seller = sqlx::query_as::<_, Seller>(
            r#"
            INSERT INTO sellers (first_name, last_name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, password
            "#,
        )
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(&payload.password)
        .fetch_one(self.pool)
        .await?;
        Ok(seller)
    }

    /// All sellers in id order, which matches insertion order on a fresh
    /// store.
    pub async fn list(&self) -> Result<Vec<Seller>, AppError> {
        let sellers = sqlx::query_as::<_, Seller>(
            "SELECT id, first_name, last_name, email, password FROM sellers ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(sellers)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Seller>, AppError> {
        let seller = sqlx::query_as::<_, Seller>(
            "SELECT id, first_name, last_name, email, password FROM sellers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(seller)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM sellers WHERE id = $1)")
            .bind(id)
            .fetch_one(self.pool)
            .await?;
        Ok(row.0)
    }

    /// Overwrite the three public fields. Returns false when no row matched.
    pub async fn update(&self, id: i64, payload: &UpdateSeller) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE sellers SET first_name = $1, last_name = $2, email = $3 WHERE id = $4",
        )
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.email)
        .bind(id)
        .execute(self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete by id; the schema cascade removes owned books in the same
    /// statement. A missing row is a no-op.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM sellers WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        tracing::debug!(seller_id = id, deleted = result.rows_affected(), "seller delete");
        Ok(())
    }
}
