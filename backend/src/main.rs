//! HTTP API for the portfolio site and its admin panel.

mod handlers;
mod routes;
mod state;

use std::env;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let admin_token = env::var("ADMIN_TOKEN").unwrap_or_else(|_| {
        tracing::warn!("ADMIN_TOKEN not set, falling back to the development token");
        "dev-admin-token".to_string()
    });

    tracing::info!("Starting portfolio backend server");

    let app_state = state::AppState::new(admin_token);
    let app = routes::create_router(app_state);

    // Development: 0.0.0.0 for direct access from the trunk dev server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
    let addr = format!("{}:{}", bind_addr, port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
