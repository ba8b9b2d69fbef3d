pub mod error;
pub mod routes;

use crate::core::people::PeopleService;
use crate::utils::error::Result;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub people: Arc<PeopleService>,
}

impl AppState {
    pub fn new(people: PeopleService) -> Self {
        Self {
            people: Arc::new(people),
        }
    }
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .route("/health", get(routes::get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tracing::instrument(level = "info", skip_all)]
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
