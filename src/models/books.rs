//! Book row and wire shapes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book row as persisted.
#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i64,
}

/// Inbound create payload.
#[derive(Debug, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i64,
}

/// Inbound update payload; a book cannot be moved to another seller.
#[derive(Debug, Deserialize)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
}

/// Full book projection, seller reference included.
#[derive(Debug, Serialize)]
pub struct BookPublic {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i64,
}

impl From<Book> for BookPublic {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            year: b.year,
            count_pages: b.count_pages,
            seller_id: b.seller_id,
        }
    }
}

/// Projection embedded in a seller detail response; omits the redundant
/// seller reference.
#[derive(Debug, Serialize)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
}

impl From<Book> for BookSummary {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            year: b.year,
            count_pages: b.count_pages,
        }
    }
}

/// List wrapper: `{"books": [...]}`.
#[derive(Debug, Serialize)]
pub struct BookList {
    pub books: Vec<BookPublic>,
}
