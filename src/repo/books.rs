//! Book storage operations.

use sqlx::PgPool;

use crate::error::AppError;
use crate::models::books::{Book, CreateBook, UpdateBook};

const BOOK_COLUMNS: &str = "id, title, author, year, count_pages, seller_id";

pub struct BookRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a book; the foreign key enforces that the seller exists.
    pub async fn create(&self, payload: &CreateBook) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (title, author, year, count_pages, seller_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(payload.year)
        .bind(payload.count_pages)
        .bind(payload.seller_id)
        .fetch_one(self.pool)
        .await?;
        Ok(book)
    }

    pub async fn list(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books ORDER BY id",
            BOOK_COLUMNS
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(books)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE id = $1",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(book)
    }

    /// All books owned by one seller, id order.
    pub async fn list_by_seller(&self, seller_id: i64) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE seller_id = $1 ORDER BY id",
            BOOK_COLUMNS
        ))
        .bind(seller_id)
        .fetch_all(self.pool)
        .await?;
        Ok(books)
    }

    /// Update the four mutable fields; the seller reference stays fixed.
    /// Returns the updated row, or None when no row matched.
    pub async fn update(&self, id: i64, payload: &UpdateBook) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            r#"
            UPDATE books SET title = $1, author = $2, year = $3, count_pages = $4
            WHERE id = $5
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(&payload.title)
        .bind(&payload.author)
        .bind(payload.year)
        .bind(payload.count_pages)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(book)
    }

    /// Delete by id. A missing row is a no-op.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
