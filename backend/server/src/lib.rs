//! # InspiCode Server
//!
//! Read-only HTTP API over the project idea catalog.
//!
//! The catalog is loaded once while building [`AppState`], wrapped in an `Arc` and handed to every
//! handler through axum state. Handlers only read it, so there are no locks anywhere.
//!
//!
//!
//! # Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `RUST_HOST` | `0.0.0.0` |
//! | `RUST_PORT` | `8000` |
//! | `CATALOG_PATH` | `static/data/Projets.json` |
//! | `TEMPLATES_DIR` | `templates` |
//! | `CATALOG_UNAVAILABLE_POLICY` | `error` (or `empty`) |
//! | `RUST_LOG` | unset, see `tracing_subscriber::EnvFilter` |
//!
//!
//!
//! # Routes
//! - `GET /api/projects`, `GET /api/random`
//! - `GET /api/categories`, `GET /api/difficulties`, `GET /api/stats`
//! - `GET /health`
//! - `GET /`, `GET /choose`, `GET /favorites`
use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod search;
pub mod state;
pub mod utils;

use config::Config;
use routes::{
    categories_handler, choose_handler, difficulties_handler, favorites_handler, health_handler,
    index_handler, projects_handler, random_handler, stats_handler,
};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(index_handler))
        .route("/choose", get(choose_handler))
        .route("/favorites", get(favorites_handler))
        .route("/api/projects", get(projects_handler))
        .route("/api/random", get(random_handler))
        .route("/api/categories", get(categories_handler))
        .route("/api/difficulties", get(difficulties_handler))
        .route("/api/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config);
    info!("{} projects loaded", state.catalog.len());

    info!("Starting server...");
    let address = state.config.address();
    let router = app(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
