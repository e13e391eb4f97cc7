use ctrlc::set_handler;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ainotes_server::{models::config::AiNotesConfig, utils::BoxError};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    let config = AiNotesConfig::from_env()?;
    let binding_addr = config.server.bind_addr.clone();
    let state = ainotes_server::init(config).await?;
    let app = ainotes_server::app(state);

    let listener = TcpListener::bind(&binding_addr).await?;
    info!("listening on {binding_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
