use anyhow::Context;
use api::auth::{TokenVerifier, middleware::log_request};
use api::routes::routes;
use api::state::AppState;
use axum::middleware::from_fn;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;
use util::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging(&config::log_file());

    let db = db::connect().await.context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to apply migrations")?;

    let app_state = AppState::new(db, TokenVerifier::from_config());

    let app = routes(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive());

    let addr: SocketAddr = format!("{}:{}", config::host(), config::port())
        .parse()
        .context("Invalid HOST/PORT")?;

    tracing::info!(
        env = %config::env(),
        "Starting {} on http://{}",
        config::project_name(),
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server crashed")?;

    Ok(())
}

fn init_logging(log_file: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_new(config::log_level()).unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config::log_to_stdout() {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
