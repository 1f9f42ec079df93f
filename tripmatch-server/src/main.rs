use anyhow::Result;
use tripmatch_core::config::ServerConfig;
use tripmatch_server::{AppState, build_router, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load()?;
    logging::init_logging(&config.log_level);

    let app = build_router(AppState::new());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("tripmatch-server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
