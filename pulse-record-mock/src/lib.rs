//! In-memory mock of the record backend
//!
//! Serves the record CRUD wire contract plus the identity endpoints, all
//! backed by in-process state. Used by integration tests and as a local
//! backend for the terminal app.

pub mod auth;
pub mod records;
pub mod seed;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::MockState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use seed::seed;

/// Build the backend router over the given state
pub fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route(
            "/api/records/{table}",
            post(records::create)
                .put(records::update)
                .delete(records::delete),
        )
        .route("/api/records/{table}/fetch", post(records::fetch))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/invites", post(auth::invite))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A running in-process backend, for tests and demos
pub struct MockServer {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockServer {
    /// Bind an ephemeral port and serve in a background task
    pub async fn spawn() -> anyhow::Result<Self> {
        let state = Arc::new(MockState::new());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = router(state.clone());

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("mock backend exited: {}", e);
            }
        });

        tracing::info!(%addr, "mock backend listening");
        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Base URL for clients
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
