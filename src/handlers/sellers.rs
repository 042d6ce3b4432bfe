//! Seller request handlers.
//!
//! The contract has two inherited quirks that are kept on purpose: a GET for
//! a missing seller answers 204 instead of 404, and PUT/DELETE misses answer
//! with empty bodies rather than JSON errors.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::AppError;
use crate::models::books::BookSummary;
use crate::models::sellers::{CreateSeller, SellerList, SellerPublic, SellerWithBooks, UpdateSeller};
use crate::repo::{BookRepo, SellerRepo};
use crate::state::AppState;
use crate::validation;

/// POST /sellers
pub async fn create_seller(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeller>,
) -> Result<(StatusCode, Json<SellerPublic>), AppError> {
    validation::validate_create_seller(&payload)?;
    let seller = SellerRepo::new(&state.pool).create(&payload).await?;
    tracing::debug!(seller_id = seller.id, "seller created");
    Ok((StatusCode::CREATED, Json(seller.into())))
}

/// GET /sellers
pub async fn list_sellers(State(state): State<AppState>) -> Result<Json<SellerList>, AppError> {
    let sellers = SellerRepo::new(&state.pool).list().await?;
    Ok(Json(SellerList {
        sellers: sellers.into_iter().map(Into::into).collect(),
    }))
}

/// GET /sellers/{seller_id}
pub async fn get_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(seller) = SellerRepo::new(&state.pool).get(seller_id).await? else {
        // Empty success, not 404.
        return Ok(StatusCode::NO_CONTENT.into_response());
    };
    let books = BookRepo::new(&state.pool)
        .list_by_seller(seller_id)
        .await?
        .into_iter()
        .map(BookSummary::from)
        .collect();
    Ok(Json(SellerWithBooks::from_parts(seller, books)).into_response())
}

/// PUT /sellers/{seller_id}
///
/// Overwrites the three public fields; the password is unreachable from here.
pub async fn update_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
    Json(payload): Json<UpdateSeller>,
) -> Result<StatusCode, AppError> {
    validation::validate_update_seller(&payload)?;
    let updated = SellerRepo::new(&state.pool)
        .update(seller_id, &payload)
        .await?;
    Ok(if updated {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    })
}

/// DELETE /sellers/{seller_id}
///
/// Idempotent: 204 whether or not the row existed. Owned books go with it.
pub async fn delete_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    SellerRepo::new(&state.pool).delete(seller_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
