//! todo-api binary entry point.

use std::sync::Arc;

use todo_api::{app, AppState, Config, MongoStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();

    let store = MongoStore::connect(&config.mongo_uri, &config.mongo_db).await?;
    let state = AppState::new(Arc::new(store));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, db = %config.mongo_db, "server starting");

    axum::serve(listener, app(state)).await?;
    Ok(())
}
