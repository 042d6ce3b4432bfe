//! Service entry point: environment, tracing, database bootstrap, serve.

use bookstore_api::{
    apply_migrations, app_router, connect_pool, ensure_database_exists, AppState, Settings,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bookstore_api=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = connect_pool(&settings.database_url, settings.max_connections).await?;
    apply_migrations(&pool).await?;

    let app = app_router(AppState { pool });

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
