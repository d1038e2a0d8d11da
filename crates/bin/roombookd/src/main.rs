//! # roombookd — roombook daemon
//!
//! Composition root that wires the booking engine to the HTTP adapter and
//! starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` logging
//! - Construct the booking engine and register configured rooms
//! - Build the axum router, injecting the engine
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use roombook_adapter_http_axum::state::AppState;
use roombook_app::booking_engine::BookingEngine;
use roombook_app::ports::Clock;
use roombook_domain::error::BookingError;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, RoomSeed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let mut engine = BookingEngine::new();
    seed_rooms(&mut engine, &config.rooms)?;
    tracing::info!(rooms = engine.rooms().len(), "booking engine ready");

    let app = roombook_adapter_http_axum::router::build(AppState::new(engine));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("roombookd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("roombookd stopped");
    Ok(())
}

/// Register every configured room, stopping at the first invalid one.
fn seed_rooms<C: Clock>(engine: &mut BookingEngine<C>, seeds: &[RoomSeed]) -> Result<(), BookingError> {
    for seed in seeds {
        engine.add_room(seed.name.clone(), seed.capacity)?;
    }
    Ok(())
}

/// Resolve when SIGINT (ctrl-c) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received, draining connections");
}
