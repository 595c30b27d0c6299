//! Namecraft Gateway binary. Reads `.env`, builds the OpenAI-compatible backend
//! once, and serves the generate endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use namecraft_core::{GatewayConfig, OpenAiBackend};
use namecraft_gateway::{router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[namecraft-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[namecraft-gateway] configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let backend = OpenAiBackend::from_config(&config.upstream);
    tracing::info!(model = backend.model(), base_url = %config.upstream.base_url, "completion backend ready");
    let app = router(AppState::new(Arc::new(backend)));

    let listener = match tokio::net::TcpListener::bind(config.bind).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("[namecraft-gateway] cannot bind {}: {}", config.bind, e);
            std::process::exit(1);
        }
    };
    tracing::info!(bind = %config.bind, version = namecraft_core::version(), "namecraft gateway listening");

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
