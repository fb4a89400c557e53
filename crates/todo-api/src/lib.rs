//! HTTP API (axum) for the todo service.
//!
//! Four CRUD routes over a [`TodoStore`] plus a health probe. The store
//! is injected through [`AppState`] so tests run against [`MemStore`]
//! while the binary wires up [`MongoStore`].

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use store::{MemStore, MongoStore, StoreError, TodoStore};

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}

/// Builds the router. The consumer is a browser, so CORS stays open.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route("/todos/:id", put(handlers::update_todo).delete(handlers::delete_todo))
        .layer(cors)
        .with_state(state)
}
