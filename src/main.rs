//! Portfolio API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_api::application::use_cases::{CheckReadinessUseCase, GetContributionsUseCase};
use portfolio_api::application::ContributionCache;
use portfolio_api::infrastructure::driven_adapters::{
    AppConfig, Database, GitHubGraphQlClient, SystemClock,
};
use portfolio_api::infrastructure::driving_adapters::api_rest::middleware::ClientRateLimiter;
use portfolio_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};

/// How often idle rate-limiter entries are dropped
const RATE_LIMIT_PURGE_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(
        debug = config.debug,
        origins = ?config.cors.allowed_origins,
        github_configured = config.github.token.as_ref().is_some_and(|t| !t.is_blank()),
        "Configuration loaded successfully"
    );

    // Create database connection pool and schema
    let database = Arc::new(Database::connect(&config.database, config.debug)?);
    database.init_db().await?;
    tracing::info!("Database initialized");

    // Create gateways
    let github_client = Arc::new(GitHubGraphQlClient::new(
        config.github.graphql_url.clone(),
        Duration::from_secs(config.github.timeout_secs),
    )?);
    let cache = Arc::new(ContributionCache::new(chrono::Duration::seconds(
        config.github.cache_ttl_secs,
    )));
    tracing::debug!(ttl_secs = cache.ttl().num_seconds(), "Contribution cache ready");

    // Create use cases
    let get_contributions_use_case = Arc::new(GetContributionsUseCase::new(
        github_client,
        Arc::new(SystemClock),
        cache,
        config.github.token.clone(),
        config.github.username.clone(),
    ));
    let check_readiness_use_case = Arc::new(CheckReadinessUseCase::new(database.clone()));

    let rate_limiter = Arc::new(ClientRateLimiter::from_config(&config.rate_limit));
    spawn_rate_limit_purge(rate_limiter.clone());

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        get_contributions_use_case,
        check_readiness_use_case,
        rate_limiter,
    };

    let app = build_router(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.pool().close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Human-readable output by default, JSON when `LOG_FORMAT=json`
fn init_tracing() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_api=debug,tower_http=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

fn spawn_rate_limit_purge(rate_limiter: Arc<ClientRateLimiter>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(RATE_LIMIT_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            rate_limiter.purge_idle();
            tracing::debug!(clients = rate_limiter.tracked_clients(), "Purged idle rate limit entries");
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
