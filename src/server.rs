//! Reusable inventory server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: metrics recorder, storage
//! backend (SQLite + migrations, or in-memory), services, REST API and
//! graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::application::inventory::InventoryService;
use crate::config::{AppConfig, StorageBackend, StorageConfig};
use crate::domain::{Entity, Repository, RepositoryProvider};
use crate::infrastructure::{
    init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider,
};
use crate::interfaces::http::{create_router, InventoryState};
use crate::shared::errors::InfraError;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (SQLite backend only).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running inventory server.
///
/// ```rust,no_run
/// use warehouse_inventory::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    pub config: AppConfig,
    /// Address actually bound (resolves port 0).
    pub local_addr: SocketAddr,

    db: Option<DatabaseConnection>,
    shutdown: ShutdownCoordinator,
    api_task: JoinHandle<()>,
}

impl ServerHandle {
    /// Start the server.
    ///
    /// 1. Install the Prometheus recorder (once per process)
    /// 2. Open the configured storage backend, migrating SQLite if requested
    /// 3. Build the services and the router
    /// 4. Bind and serve until the shutdown signal fires
    pub async fn start(opts: ServerOptions) -> Result<Self, InfraError> {
        let app_cfg = opts.config;
        info!(backend = %app_cfg.storage.backend, "Starting inventory service...");

        let prometheus_handle = prometheus_handle();

        let (repos, db): (Arc<dyn RepositoryProvider>, Option<DatabaseConnection>) =
            match app_cfg.storage.backend {
                StorageBackend::Sqlite => {
                    let mut db_config = DatabaseConfig::new(app_cfg.database.url.clone());
                    if !opts.auto_migrate {
                        db_config = db_config.without_migrations();
                    }
                    let db = init_database(&db_config).await?;
                    (Arc::new(SeaOrmRepositoryProvider::new(db.clone())), Some(db))
                }
                StorageBackend::Memory => {
                    warn!("In-memory storage: data is lost when the process exits");
                    (Arc::new(InMemoryRepositoryProvider::new()), None)
                }
            };

        let state = build_state(
            repos.as_ref(),
            &app_cfg.storage,
            db.clone(),
            prometheus_handle,
        );
        let router = create_router(state);

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout_secs);
        let api_shutdown = shutdown.signal();

        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/swagger-ui/", local_addr);

        let api_task = tokio::spawn(async move {
            let server = axum::serve(listener, router).with_graceful_shutdown(async move {
                api_shutdown.notified().await;
                info!("REST API received shutdown signal");
            });
            if let Err(e) = server.await {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install SIGTERM / SIGINT listeners that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the API task to stop, bounded by the shutdown timeout once
    /// the signal has fired.
    pub async fn wait(self) {
        let signal = self.shutdown.signal();
        let timeout = self.shutdown.timeout();
        let mut api_task = self.api_task;

        tokio::select! {
            result = &mut api_task => report_api_exit(result),
            _ = signal.notified() => {
                info!("Waiting up to {:?} for in-flight requests...", timeout);
                match tokio::time::timeout(timeout, &mut api_task).await {
                    Ok(result) => report_api_exit(result),
                    Err(_) => {
                        warn!("Shutdown timeout elapsed, aborting REST API task");
                        api_task.abort();
                    }
                }
            }
        }

        if let Some(db) = self.db {
            if let Err(e) = db.close().await {
                warn!("Error closing database connection: {}", e);
            } else {
                info!("Database connection closed");
            }
        }

        info!("Inventory service shutdown complete");
    }

    pub async fn shutdown(self) {
        info!("Shutting down inventory service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

fn report_api_exit(result: Result<(), tokio::task::JoinError>) {
    match result {
        Ok(()) => info!("REST API server stopped"),
        Err(e) => error!("REST API task panicked: {}", e),
    }
}

// ── Wiring ─────────────────────────────────────────────────────────

fn build_service<E: Entity>(
    repo: Arc<dyn Repository<E>>,
    storage: &StorageConfig,
) -> Arc<InventoryService<E>> {
    Arc::new(if storage.serialize_writes {
        InventoryService::with_serialized_writes(repo)
    } else {
        InventoryService::new(repo)
    })
}

/// Assemble the HTTP state from a repository provider.
pub fn build_state(
    repos: &dyn RepositoryProvider,
    storage: &StorageConfig,
    db: Option<DatabaseConnection>,
    metrics: PrometheusHandle,
) -> InventoryState {
    if storage.serialize_writes {
        info!("Write serialization enabled");
    }
    InventoryState {
        employees: build_service(repos.employees(), storage),
        sections: build_service(repos.sections(), storage),
        products: build_service(repos.products(), storage),
        db,
        backend: storage.backend.as_str(),
        metrics,
        started_at: Arc::new(Instant::now()),
    }
}

/// The global recorder can be installed only once per process; restarts
/// within the same process reuse it. If another recorder already owns the
/// global slot, metrics are rendered from a detached recorder instead.
pub fn prometheus_handle() -> PrometheusHandle {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    PROM_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("Prometheus metrics recorder installed");
                handle
            }
            Err(e) => {
                warn!("Prometheus recorder not installed: {}", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

/// Initialize tracing from the application config.
///
/// Call once at process startup, before [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_options() -> ServerOptions {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.server.shutdown_timeout_secs = 1;
        config.storage.backend = StorageBackend::Memory;
        ServerOptions {
            config,
            auto_migrate: false,
        }
    }

    #[tokio::test]
    async fn memory_server_starts_and_stops() {
        let handle = ServerHandle::start(memory_options()).await.unwrap();
        assert_ne!(handle.local_addr.port(), 0);
        assert!(handle.is_running());
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn sqlite_server_runs_migrations() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = memory_options();
        opts.config.storage.backend = StorageBackend::Sqlite;
        opts.config.database.url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("inventory.db").display()
        );
        opts.auto_migrate = true;

        let handle = ServerHandle::start(opts).await.unwrap();
        let employees = handle.repos.employees().get_all().await.unwrap();
        assert!(employees.is_empty());
        handle.shutdown().await;
    }

    #[test]
    fn build_state_honors_serialize_writes() {
        let repos = InMemoryRepositoryProvider::new();
        let storage = StorageConfig {
            backend: StorageBackend::Memory,
            serialize_writes: true,
        };
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = build_state(&repos, &storage, None, handle);
        assert!(state.employees.serializes_writes());
        assert!(state.products.serializes_writes());
        assert_eq!(state.backend, "memory");
    }
}
