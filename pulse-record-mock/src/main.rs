use pulse_record_mock::state::MockState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pulse_record_mock=debug,tower_http=info")),
        )
        .init();

    let state = Arc::new(MockState::new());
    pulse_record_mock::seed(&state).await;

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("record backend mock listening on {}", listener.local_addr()?);

    axum::serve(listener, pulse_record_mock::router(state)).await?;
    Ok(())
}
