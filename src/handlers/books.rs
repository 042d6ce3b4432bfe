//! Book request handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::books::{BookList, BookPublic, CreateBook, UpdateBook};
use crate::repo::{BookRepo, SellerRepo};
use crate::state::AppState;
use crate::validation;

/// POST /books
///
/// The seller is checked up front so a dangling reference surfaces as a
/// validation error instead of a raw constraint failure.
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBook>,
) -> Result<(StatusCode, Json<BookPublic>), AppError> {
    validation::validate_create_book(&payload)?;
    if !SellerRepo::new(&state.pool).exists(payload.seller_id).await? {
        return Err(AppError::Validation(format!(
            "seller_id {} references no existing seller",
            payload.seller_id
        )));
    }
    let book = BookRepo::new(&state.pool).create(&payload).await?;
    tracing::debug!(book_id = book.id, seller_id = book.seller_id, "book created");
    Ok((StatusCode::CREATED, Json(book.into())))
}

/// GET /books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<BookList>, AppError> {
    let books = BookRepo::new(&state.pool).list().await?;
    Ok(Json(BookList {
        books: books.into_iter().map(Into::into).collect(),
    }))
}

/// GET /books/{book_id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
) -> Result<Json<BookPublic>, AppError> {
    let book = BookRepo::new(&state.pool)
        .get(book_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("book {}", book_id)))?;
    Ok(Json(book.into()))
}

/// PUT /books/{book_id}
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
    Json(payload): Json<UpdateBook>,
) -> Result<Json<BookPublic>, AppError> {
    validation::validate_update_book(&payload)?;
    let book = BookRepo::new(&state.pool)
        .update(book_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("book {}", book_id)))?;
    Ok(Json(book.into()))
}

/// DELETE /books/{book_id}
///
/// Idempotent like the seller delete.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    BookRepo::new(&state.pool).delete(book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
