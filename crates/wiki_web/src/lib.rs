use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    // Open to every origin; restrict at deployment time if needed.
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/articles", get(handlers::list_articles))
        .route("/articles/:slug", get(handlers::get_article))
        .route("/search", get(handlers::search))
        .route("/categories", get(handlers::list_categories))
        .route("/ai/explain", get(handlers::explain))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Serve the app on an already bound listener until the process is stopped.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on http://{}", addr);
    }
    axum::serve(listener, create_app(state)).await
}

pub mod prelude {
    pub use wiki_core::{Article, ArticleSnippet, Error, Result};
    pub use crate::{create_app, serve, AppState};
}
