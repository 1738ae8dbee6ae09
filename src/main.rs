use anyhow::Result;
use axum::{ServiceExt, body::Body};
use std::{net::SocketAddr, sync::Arc};
use stocktrail::application::{
    ports::{identity::IdentityProvider, time::Clock},
    services::ApplicationServices,
};
use stocktrail::config::AppConfig;
use stocktrail::domain::{
    audit::repository::AuditLogRepository, category::CategoryRepository, product::ProductRepository,
};
use stocktrail::infrastructure::{
    database,
    identity::PostgresIdentityProvider,
    repositories::{
        PostgresAuditLogRepository, PostgresCategoryRepository, PostgresProductRepository,
    },
    time::SystemClock,
};
use stocktrail::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let identity_provider = PostgresIdentityProvider::new(pool.clone());
    identity_provider.seed_default_accounts().await?;

    let audit_repo: Arc<dyn AuditLogRepository> =
        Arc::new(PostgresAuditLogRepository::new(pool.clone()));
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(PostgresProductRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let identity: Arc<dyn IdentityProvider> = Arc::new(identity_provider);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        audit_repo,
        product_repo,
        category_repo,
        identity,
        clock,
        config.display_timezone(),
        config.local_offset_hours(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
