//! Kitchen Command Center - Main Entry Point
//! Composition root: config, logging, storage, services, JSON-RPC server

mod settings;
mod telemetry;

use anyhow::{Context, Result};
use settings::{DaemonConfig, LogFormat};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use kitchen_api_rpc::{RpcServer, RpcServerConfig};
use kitchen_core::application::{EventService, KitchenService, TaskService};
use kitchen_core::port::{SystemTimeProvider, TimeProvider};
use kitchen_infra_sqlite::{
    create_pool, run_migrations, SqliteEventRepository, SqliteTaskRepository,
};

const DEFAULT_LOG_FILTER: &str = "kitchen=info";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Configuration (defaults -> KITCHEN_CONFIG file -> KITCHEN_* env)
    let cfg = DaemonConfig::load()?;

    // 2. Logging
    init_logging(cfg.log_format)?;
    info!(version = kitchen_core::VERSION, "Kitchen Command Center starting...");
    if telemetry::requested_but_disabled() {
        warn!("OTLP endpoint set but feature 'telemetry' not enabled; rebuild with --features telemetry");
    }

    // 3. Database
    info!(db_path = %cfg.db_path, "Initializing database...");
    let pool = create_pool(&cfg.database_url())
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 4. Dependency wiring
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
    let tasks = Arc::new(TaskService::new(
        Arc::new(SqliteTaskRepository::new(pool.clone())),
        time_provider.clone(),
    ));
    let events = Arc::new(EventService::new(Arc::new(SqliteEventRepository::new(
        pool.clone(),
    ))));
    let kitchen = Arc::new(KitchenService::new(time_provider.clone()));

    // 5. JSON-RPC server
    let rpc_config = RpcServerConfig {
        host: cfg.rpc_host.clone(),
        port: cfg.rpc_port,
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, tasks, events, kitchen, time_provider)
        .start()
        .await
        .context("RPC server start failed")?;

    info!(%addr, "System ready. Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("Shutdown signal received. Exiting gracefully...");

    rpc_handle.stop().context("RPC server stop failed")?;
    rpc_handle.stopped().await;
    pool.close().await;
    telemetry::shutdown();

    info!("Shutdown complete.");
    Ok(())
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("invalid log filter")?;

    let fmt_layer: telemetry::BoxedLayer = match format {
        // Production: JSON structured logging
        LogFormat::Json => fmt::layer().json().boxed(),
        // Development: pretty output with colors
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
    };

    let mut layers = vec![fmt_layer];
    if let Some(otel) = telemetry::layer()? {
        layers.push(otel);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}
