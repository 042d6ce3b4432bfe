//! Seller row and wire shapes.
//!
//! Three outbound projections exist on purpose: the public seller, the list
//! wrapper, and the seller-with-books detail. None of them has a password
//! field, so the secret cannot leak through serialization.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::books::BookSummary;

/// Seller row as persisted. The password never leaves the crate.
#[derive(Debug, Clone, FromRow)]
pub struct Seller {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Inbound create payload. The only shape that carries the password.
#[derive(Debug, Deserialize)]
pub struct CreateSeller {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Inbound update payload; the password is not updatable through this surface.
#[derive(Debug, Deserialize)]
pub struct UpdateSeller {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Public seller projection.
#[derive(Debug, Serialize)]
pub struct SellerPublic {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<Seller> for SellerPublic {
    fn from(s: Seller) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            email: s.email,
        }
    }
}

/// List wrapper: `{"sellers": [...]}`.
#[derive(Debug, Serialize)]
pub struct SellerList {
    pub sellers: Vec<SellerPublic>,
}

/// Detail projection: public fields plus the owned books.
#[derive(Debug, Serialize)]
pub struct SellerWithBooks {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub books: Vec<BookSummary>,
}

impl SellerWithBooks {
    pub fn from_parts(seller: Seller, books: Vec<BookSummary>) -> Self {
        Self {
            id: seller.id,
            first_name: seller.first_name,
            last_name: seller.last_name,
            email: seller.email,
            books,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Seller {
        Seller {
            id: 1,
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "johndoe@example.com".into(),
            password: "x".into(),
        }
    }

    #[test]
    fn public_projection_has_no_password_key() {
        let v = serde_json::to_value(SellerPublic::from(sample())).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["id", "first_name", "last_name", "email"]);
    }

    #[test]
    fn list_wrapper_uses_sellers_key() {
        let v = serde_json::to_value(SellerList {
            sellers: vec![SellerPublic::from(sample())],
        })
        .unwrap();
        assert!(v.get("sellers").unwrap().is_array());
    }

    #[test]
    fn detail_projection_embeds_books_without_password() {
        let v = serde_json::to_value(SellerWithBooks::from_parts(sample(), vec![])).unwrap();
        let obj = v.as_object().unwrap();
        assert!(obj.contains_key("books"));
        assert!(!obj.contains_key("password"));
    }
}
