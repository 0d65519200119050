mod model;
mod server;

use clap::Parser;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

/// Dedicated server management API emulator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Run pending database migrations and exit
    #[arg(long)]
    migrate_only: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    if cli.migrate_only {
        tracing::info!("Migrations applied, exiting");
        return Ok(());
    }

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, router::app(AppState::new(db)))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
