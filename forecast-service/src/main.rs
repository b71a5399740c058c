use common::tracing::{init_tracing, init_tracing_pretty};
use forecast_service::{config, handlers, sample, store};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("LOG_FORMAT").ok().as_deref() == Some("json") {
        init_tracing();
    } else {
        init_tracing_pretty();
    }

    let config = config::Config::from_env();

    let store = Arc::new(store::ForecastStore::new());
    let generator = Arc::new(sample::SampleGenerator::new(
        store.clone(),
        config.default_location.clone(),
    ));

    let state = handlers::AppState {
        store,
        generator,
        default_location: config.default_location,
    };

    let app = forecast_service::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Forecast service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Forecast service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
