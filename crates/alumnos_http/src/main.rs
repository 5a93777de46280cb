//! `alumnos` binary: load configuration, open the store, serve HTTP.

use std::process::ExitCode;
use std::sync::Arc;

use alumnos_core::{init_logging, SqliteAlumnoRepository, Store};
use alumnos_http::{AppState, HttpServer, ServerConfig};
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal.
    dotenvy::dotenv().ok();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let store = match Store::open(&config.db_path) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            error!(
                "event=startup module=main status=error path={} error={}",
                config.db_path.display(),
                err
            );
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(SqliteAlumnoRepository::new(store));
    let server = HttpServer::new(config, state);

    match server.start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_stop module=main status=error error={}", err);
            ExitCode::FAILURE
        }
    }
}
