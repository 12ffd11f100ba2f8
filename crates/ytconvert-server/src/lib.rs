//! ytconvert-server: HTTP API for converting video URLs into audio downloads
//!
//! Routes:
//! - `GET /health`: liveness probe
//! - `POST /convert`: `{ "url": ... }` in, `audio/mp4` attachment out

mod cors;
mod error;
mod routes;

pub use error::ApiError;
pub use routes::{router, AppState};

use std::net::SocketAddr;
use tracing::info;

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(addr: SocketAddr, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
