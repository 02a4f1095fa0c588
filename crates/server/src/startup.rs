use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};
use service::issue::{InMemoryIssueRepository, IssueRepository, IssueService, SeaOrmIssueRepository};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Open the configured store once; every request shares the returned handle.
pub async fn build_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn IssueRepository>> {
    match cfg.storage.backend {
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            info!("issue schema up to date");
            Ok(Arc::new(SeaOrmIssueRepository::new(db)))
        }
        StorageBackend::Memory => {
            warn!("using in-memory issue store; data is lost on restart");
            Ok(Arc::new(InMemoryIssueRepository::new()))
        }
    }
}

pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let repo = build_repository(cfg).await?;
    let issues = IssueService::new(repo).with_timeout(cfg.issues.request_timeout());
    Ok(ServerState { issues: Arc::new(issues) })
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Serve an already-validated configuration until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let budget = state.issues.timeout();
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.storage.backend, timeout = ?budget, "starting issue server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
