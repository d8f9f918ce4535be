//! Assessly server entry point.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use assessly::adapters::http::{api_router, CompatibilityAppState, ScoringAppState};
use assessly::adapters::postgres::{
    PostgresCompatibilityPairRepository, PostgresScoringResultRepository,
    PostgresTeamRosterReader, PostgresWeightTableReader,
};
use assessly::config::AppConfig;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let pool = config.database.connect().await?;
    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    let scoring = ScoringAppState {
        weight_tables: Arc::new(PostgresWeightTableReader::new(pool.clone())),
        results: Arc::new(PostgresScoringResultRepository::new(pool.clone())),
        max_answers_per_submission: config.scoring.max_answers_per_submission,
        verbose_errors: config.features.verbose_errors,
    };
    let compatibility = CompatibilityAppState {
        pairs: Arc::new(PostgresCompatibilityPairRepository::new(pool.clone())),
        rosters: Arc::new(PostgresTeamRosterReader::new(pool)),
        max_roster_size: config.scoring.max_roster_size,
        verbose_errors: config.features.verbose_errors,
    };

    let app = api_router(scoring, compatibility, &config.server, &config.features);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Assessly listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
