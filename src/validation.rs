//! Length caps mirroring the column definitions. Always runs before any
//! storage access; presence and typing are already enforced by the JSON
//! extractor.

use crate::error::AppError;
use crate::models::books::{CreateBook, UpdateBook};
use crate::models::sellers::{CreateSeller, UpdateSeller};

pub const SELLER_FIELD_MAX: usize = 50;
pub const BOOK_FIELD_MAX: usize = 100;

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), AppError> {
    // VARCHAR(n) counts characters, not bytes.
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn validate_create_seller(payload: &CreateSeller) -> Result<(), AppError> {
    check_len("first_name", &payload.first_name, SELLER_FIELD_MAX)?;
    check_len("last_name", &payload.last_name, SELLER_FIELD_MAX)?;
    check_len("email", &payload.email, SELLER_FIELD_MAX)?;
    check_len("password", &payload.password, SELLER_FIELD_MAX)
}

pub fn validate_update_seller(payload: &UpdateSeller) -> Result<(), AppError> {
    check_len("first_name", &payload.first_name, SELLER_FIELD_MAX)?;
    check_len("last_name", &payload.last_name, SELLER_FIELD_MAX)?;
    check_len("email", &payload.email, SELLER_FIELD_MAX)
}

pub fn validate_create_book(payload: &CreateBook) -> Result<(), AppError> {
    check_len("title", &payload.title, BOOK_FIELD_MAX)?;
    check_len("author", &payload.author, BOOK_FIELD_MAX)
}

pub fn validate_update_book(payload: &UpdateBook) -> Result<(), AppError> {
    check_len("title", &payload.title, BOOK_FIELD_MAX)?;
    check_len("author", &payload.author, BOOK_FIELD_MAX)
}
