/*
 * Responsibility
 * - Tracing init → Config → build services → assemble the Router
 * - Apply router-wide middleware (HTTP plumbing / CORS / security headers)
 * - Start with axum::serve()
 */
use anyhow::Result;
use axum::Router;

use crate::{
    api,
    config::Config,
    middleware,
    services::auth::build_token_verifier,
    state::AppState,
};

fn init_tracing() {
    // RUST_LOG wins when set, e.g.
    // RUST_LOG=info,token_auth_gate=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let state = AppState::new(build_token_verifier(&config));

    tracing::info!(
        "starting token gate in {:?} mode on {} (leeway {}s)",
        config.app_env,
        config.addr,
        state.verifier.leeway_seconds()
    );
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router)
}
