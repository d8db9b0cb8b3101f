use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use finance_api::build_app;
use finance_api::domains::auth::services::TokenService;
use finance_api::shared::clients::FirebaseClient;
use finance_api::shared::config::AppConfig;
use finance_api::shared::database::Database;
use finance_api::shared::services::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // DB 연결 + 마이그레이션
    let db = Database::new(&config.database_url).await?;
    db.initialize().await?;

    let token_service = TokenService::new(config.jwt_secret.as_bytes());
    let identity_provider = FirebaseClient::new(config.firebase_api_key.clone())?;

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(db, token_service, Arc::new(identity_provider));
    let app = build_app(app_state, &config.cors_origin)?;

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "Server running");
    tracing::info!("Swagger UI available at http://{}/api", config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
