//! Bookstore catalog backend: sellers and their books over HTTP, PostgreSQL storage.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod repo;
pub mod routes;
pub mod state;
pub mod validation;

pub use config::Settings;
pub use db::{connect_pool, ensure_database_exists};
pub use error::AppError;
pub use migration::apply_migrations;
pub use routes::{api_routes, app_router, common_routes};
pub use state::AppState;
