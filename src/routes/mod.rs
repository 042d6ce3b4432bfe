//! Router assembly.

mod common;

use axum::routing::get;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::{books, sellers};
use crate::state::AppState;

pub use common::common_routes;

/// Payloads here are a handful of short fields.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Resource routes: /sellers and /books.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/sellers",
            get(sellers::list_sellers).post(sellers::create_seller),
        )
        .route(
            "/sellers/:seller_id",
            get(sellers::get_seller)
                .put(sellers::update_seller)
                .delete(sellers::delete_seller),
        )
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:book_id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}

/// Full application router: resources plus common endpoints.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
}
