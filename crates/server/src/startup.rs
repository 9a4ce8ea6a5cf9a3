use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::Router;
use configs::AppConfig;
use models::Employee;
use service::{EmployeeService, JsonListStore};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;

/// Shared handler state; the storage location is injected through the service.
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

impl AppState {
    /// State backed by the JSON file at `path`.
    pub fn with_file<P: Into<PathBuf>>(path: P) -> Self {
        let store = JsonListStore::<Employee>::new(path);
        Self { employees: EmployeeService::new(Arc::new(store)) }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.bind_addr();
    addr.parse::<SocketAddr>()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {addr}: {e}")))
}

/// Build the app for `cfg`, without binding a socket.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let data_file = PathBuf::from(&cfg.storage.employees_file);
    common::env::ensure_data_file_dir(&data_file).await?;
    let state = AppState::with_file(data_file);
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and run the HTTP server until the process is stopped
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    info!(%addr, file = %cfg.storage.employees_file, "API server is running");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_unparsable_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn bind_addr_uses_configured_port() {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg).unwrap().port(), 3000);
    }
}
