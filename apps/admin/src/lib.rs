//! # Forge Admin
//!
//! Back end of the customer and raw-material admin screens.
//!
//! ## Module Organization
//! ```text
//! forge-admin/src/
//! ├── main.rs       ◄─── Binary entry point
//! ├── lib.rs        ◄─── You are here (startup sequence)
//! ├── error.rs      ◄─── ApiError returned by every command
//! ├── ipc.rs        ◄─── JSON-lines host on stdin/stdout
//! ├── commands/     ◄─── customer, material, system
//! └── state/        ◄─── DbState, AdminConfig
//! ```

pub mod commands;
pub mod error;
pub mod ipc;
pub mod state;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use forge_db::{seed, Database, DbConfig, DbError};
use state::{AdminConfig, AppState, ConfigError, DbState};

/// Errors that stop the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the admin back end.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • FORGE_DB_PATH, FORGE_DB_MAX_CONNECTIONS, FORGE_LOG, FORGE_SEED    │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │     • Seed demo data if FORGE_SEED and the database is empty           │
/// │                                                                         │
/// │  4. Serve IPC ────────────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line until EOF                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), StartupError> {
    let config = AdminConfig::load()?;

    init_tracing(&config.log_filter);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting Forge Admin");

    let db = open_database(&config).await?;
    info!("Database connected and migrations applied");

    if config.seed {
        let report = seed::seed_demo_data(&db, seed::DEFAULT_CUSTOMER_COUNT).await?;
        if !report.skipped() {
            info!(
                customers = report.customers,
                materials = report.materials,
                "Demo data seeded"
            );
        }
    }

    let state = AppState::new(DbState::new(db), config);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    ipc::serve(&state, stdin, stdout).await?;

    state.db.inner().close().await;
    info!("Forge Admin stopped");
    Ok(())
}

/// Opens the configured database, creating its directory if needed.
pub async fn open_database(config: &AdminConfig) -> Result<Database, StartupError> {
    let db_config = DbConfig::new(&config.db_path).max_connections(config.db_max_connections);

    if !db_config.is_in_memory() {
        if let Some(dir) = config.db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
    }

    info!(db_path = %config.db_path.display(), "Opening database");
    Ok(Database::new(db_config).await?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `FORGE_LOG=debug` - Show debug messages
/// - `FORGE_LOG=forge=trace` - Show trace for forge crates only
/// - Default: `info,forge=debug,sqlx=warn`
///
/// Output goes to stderr; stdout is reserved for IPC responses.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(state::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .init();
}
