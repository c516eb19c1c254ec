/*
 * Responsibility
 * - Load Config -> build the engine -> assemble the Router
 * - Apply middleware (field authentication on /api/v1, HTTP layers on everything)
 * - Start with axum::serve()
 */
use std::{panic, process};

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::v1::handlers::health::health;
use crate::config::Config;
use crate::middleware;
use crate::middleware::http::HttpLimits;
use crate::services::auth::build_internal_auth;
use crate::state::AppState;

fn init_tracing() {
    // RUST_LOG wins when set, e.g.
    // RUST_LOG=info,internal_auth=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics through tracing; stderr may not be collected.
        tracing::error!(?info, "panic");

        // Development: crash the whole process so it gets noticed.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let auth = build_internal_auth(&config.auth).context("invalid claim mapping")?;
    let state = AppState::new(auth);

    let app = middleware::http::apply(build_router(state), HttpLimits::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Routes with authentication wired in, without the HTTP transport layers.
pub fn build_router(state: AppState) -> Router {
    let v1 = middleware::auth::access::apply(api::v1::routes(), state.clone());

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", v1)
        .with_state(state)
}
