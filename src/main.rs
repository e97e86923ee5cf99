use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rutina::config::Config;
use rutina::handlers::{auth, progress, routine, train};
use rutina::repositories::{AccountRepository, LogRepository, RoutineRepository};
use rutina::routes;
use rutina::session::SessionHandle;
use rutina::storage::{CsvTable, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rutina=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Using data directory: {}", config.data_dir.display());

    // Tables are read lazily, a missing file is an empty table
    let account_repo = AccountRepository::new(Store::new(CsvTable::new(config.users_path())));
    let routine_repo = RoutineRepository::new(Store::new(CsvTable::new(config.routines_path())));
    let log_repo = LogRepository::new(Store::new(CsvTable::new(config.logs_path())));

    tracing::info!("{} registered users", account_repo.count().await?);

    // Create handler states
    let auth_state = auth::AuthState {
        account_repo: account_repo.clone(),
        routine_repo: routine_repo.clone(),
    };
    let train_state = train::TrainState {
        routine_repo: routine_repo.clone(),
        log_repo: log_repo.clone(),
    };
    let routine_state = routine::RoutineState {
        routine_repo: routine_repo.clone(),
    };
    let progress_state = progress::ProgressState {
        log_repo: log_repo.clone(),
    };

    // Build router
    let app = routes::create_router(
        auth_state,
        train_state,
        routine_state,
        progress_state,
        SessionHandle::new(),
    );

    // Start server
    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
