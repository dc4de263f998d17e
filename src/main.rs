use rosterd::api;
use rosterd::config::Config;
use rosterd::store::UserStore;
use rosterd::store::postgres::PgUserStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = Config::from_env()?;
    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::connect(&config.database_url).await?);

    let app = api::router(store);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
