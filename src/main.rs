use crate::api::HttpHousingApi;
use crate::app::AppState;
use crate::config::Config;
use crate::responses::error_response;
use crate::router::handle;
use astra::Server;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod check;
mod config;
mod domain;
mod errors;
mod map;
mod photos;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "hospital_housing", about = "Hospital housing explorer", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the explorer web server (default)
    Serve,
    /// Smoke-check a running backend and explorer
    Check {
        #[arg(long, default_value = check::DEFAULT_BACKEND)]
        backend: String,
        #[arg(long, default_value = check::DEFAULT_FRONTEND)]
        frontend: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hospital_housing=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(),
        Command::Check { backend, frontend } => {
            std::process::exit(check::run(&backend, &frontend));
        }
    }
}

fn serve() {
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let api = match HttpHousingApi::new(cfg.api_base_url.clone(), cfg.http_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!(error = %e, "could not build backend client");
            std::process::exit(1);
        }
    };

    let addr = cfg.bind_addr;
    let workers = cfg.max_workers;
    info!(
        %addr,
        environment = ?cfg.environment,
        backend = %cfg.api_base_url,
        "starting server"
    );

    let app = AppState::new(cfg, Arc::new(api));
    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(error = %err, "request failed");
            } else {
                warn!(error = %err, "request rejected");
            }
            error_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
