mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let store_connection = startup::connect_to_tenant_storage(&config).await?;
    let provisioner = startup::setup_provisioner(&db, store_connection);

    tracing::info!("Provisioning guild databases");
    startup::bootstrap_tenants(&provisioner).await?;

    let router = server::router::router().with_state(AppState::new(provisioner));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
