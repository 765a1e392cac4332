//! In-memory todo service.
//!
//! # Overview
//! `TodoStore` holds the todo records; `routes` maps `/api/todos` requests
//! onto store operations and renders `{message, ...}` JSON envelopes.
//!
//! # Design
//! - The store is injected as router state (`SharedStore`), never a global.
//!   `app()` boots with the seed records; tests use `app_with_store`.
//! - Store operations are synchronous; handlers hold the lock only for the
//!   duration of one operation.
//! - Failures are `TodoError`, which renders its own status and JSON body.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use config::Config;
pub use error::TodoError;
pub use routes::{SearchResponse, TodoResponse, TodosResponse};
pub use store::{SortDirection, Todo, TodoStore};

pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Router over a freshly seeded store.
pub fn app() -> Router {
    app_with_store(TodoStore::seeded())
}

pub fn app_with_store(store: TodoStore) -> Router {
    let store: SharedStore = Arc::new(RwLock::new(store));
    routes::router(store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!("todo server listening on http://{addr}");
    }
    axum::serve(listener, app()).await
}
