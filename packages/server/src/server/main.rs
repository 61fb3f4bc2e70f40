// Main entry point for the job fetcher service

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serpapi_client::SerpApiClient;
use server_core::kernel::{
    IngestionScheduler, PostgresPostingStore, SerpApiSource, ServerDeps, TriggerOutcome,
};
use server_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "server")]
#[command(about = "Scheduled job listing ingestion service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the cron scheduler and the liveness endpoint (default)
    Serve,

    /// Run one profile now and exit
    Run {
        #[arg(long)]
        profile: String,
    },

    /// List the configured query profiles
    Profiles,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "Unhandled panic");
    }));

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        profiles = config.profiles.len(),
        timezone = %config.schedule_timezone,
        run_policy = %config.run_policy,
        "Configuration loaded"
    );

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Run { profile } => run_once(config, &profile).await,
        Commands::Profiles => {
            for profile in &config.profiles {
                println!(
                    "{}\t{}\t{} queries",
                    profile.name,
                    profile.schedule,
                    profile.terms.len()
                );
            }
            Ok(())
        }
    }
}

async fn connect(config: &Config) -> Result<PgPool> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    Ok(pool)
}

fn build_scheduler(config: &Config, pool: PgPool) -> Result<IngestionScheduler> {
    let client = SerpApiClient::with_timeout(config.serpapi_key.clone(), config.fetch_timeout)
        .context("Failed to create SerpApi client")?;
    let deps = ServerDeps::new(
        Arc::new(SerpApiSource::new(Arc::new(client))),
        Arc::new(PostgresPostingStore::new(pool)),
    );

    Ok(IngestionScheduler::new(
        Arc::new(deps),
        config.profiles.clone(),
        config.run_policy,
    ))
}

async fn serve(config: Config) -> Result<()> {
    let pool = connect(&config).await?;
    let ingestion = build_scheduler(&config, pool)?;

    let mut scheduler = ingestion
        .start(config.schedule_timezone)
        .await
        .context("Failed to start scheduled tasks")?;

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, build_app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutting down scheduled tasks");
    scheduler
        .shutdown()
        .await
        .context("Failed to shut down scheduler")?;

    Ok(())
}

async fn run_once(config: Config, profile: &str) -> Result<()> {
    let pool = connect(&config).await?;
    let ingestion = build_scheduler(&config, pool)?;

    match ingestion.trigger(profile).await {
        TriggerOutcome::Completed(summary) => {
            println!(
                "{}: {} new jobs stored ({} duplicates, {}/{} queries failed)",
                summary.profile,
                summary.inserted,
                summary.duplicates,
                summary.queries_failed,
                summary.queries_attempted
            );
            Ok(())
        }
        TriggerOutcome::Failed(e) => Err(e.into()),
        TriggerOutcome::Aborted(reason) => bail!("Ingestion run aborted: {}", reason),
        TriggerOutcome::Skipped => bail!("Another ingestion run is in progress"),
        TriggerOutcome::UnknownProfile(name) => {
            bail!("Unknown query profile {} (see `server profiles`)", name)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
