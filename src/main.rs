mod api;
mod config;
mod error;
mod metrics;

use std::net::SocketAddr;
use std::sync::Arc;

use error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use metrics::MetricsRegistry;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<()> {
    // Загружаем .env файл
    dotenvy::dotenv().ok();

    // Инициализация логирования
    setup_tracing();

    let config = Config::from_env();

    tracing::info!(
        "Loaded configuration: application on {}, metrics on {}",
        config.server_addr,
        config.metrics_addr
    );

    // Создаём реестр метрик
    let registry = MetricsRegistry::new();

    // Создаём состояние приложения
    let state = Arc::new(api::AppState {
        config: config.clone(),
        metrics: registry,
    });

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Ожидание Ctrl+C
    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    // Метрики начинают слушать до старта основного сервера
    let metrics_addr: SocketAddr = config.metrics_addr.parse().map_err(|e| {
        tracing::error!("Invalid metrics address: {}", e);
        e
    })?;

    let metrics_listener = tokio::net::TcpListener::bind(metrics_addr)
        .await
        .map_err(|e| {
            tracing::error!("Failed to bind metrics address: {}", e);
            e
        })?;

    tracing::info!("Metrics exporter listening on {}", metrics_addr);

    let metrics_app = api::create_metrics_router(state.clone());
    let mut metrics_shutdown = shutdown_rx.clone();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(metrics_listener, metrics_app)
            .with_graceful_shutdown(async move {
                let _ = metrics_shutdown.changed().await;
                tracing::info!("Metrics server shutting down");
            })
            .await
        {
            tracing::error!("Metrics server error: {}", e);
        }
    });

    // Создание router
    let app = api::create_router(state);

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    // Настройка адреса для прослушивания
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Platform hello service starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /        - Greeting");
    tracing::info!("  - GET /health  - Health check");
    tracing::info!("  - GET /metrics - Prometheus metrics (on {})", metrics_addr);

    // Запуск сервера с graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.clone().changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // Используем EnvFilter::from_default_env() для правильной обработки RUST_LOG
    // Если RUST_LOG не установлена, используем "info" по умолчанию
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
