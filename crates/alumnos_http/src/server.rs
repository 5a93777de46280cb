//! HTTP server: alumno routes plus static assets.

use std::path::Path;

use axum::Router;
use log::info;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::routes::{alumno_routes, AppState};

pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        let router = build_router(state, &config.public_dir);
        Self { config, router }
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Binds the configured address and serves until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let local_addr = listener.local_addr()?;

        info!(
            "event=server_start module=http status=ok addr={} version={}",
            local_addr,
            alumnos_core::core_version()
        );
        info!("Servidor corriendo en: http://localhost:{}/", local_addr.port());

        axum::serve(listener, self.router).await
    }
}

/// Routes first; anything unmatched is looked up under `public_dir`.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    alumno_routes(state).fallback_service(ServeDir::new(public_dir))
}
