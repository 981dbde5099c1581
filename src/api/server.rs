//! HTTP server lifecycle.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::api_router;
use crate::app_state::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Failed to get server address: {0}")]
    LocalAddr(std::io::Error),
}

/// Handle to a running server.
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ApiServer {
    /// Signal a graceful shutdown. In-flight requests are allowed to finish.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }

    /// Wait for the server task to exit.
    pub async fn wait(self) {
        if let Err(e) = self.task.await {
            tracing::error!("API server task failed: {e}");
        }
    }
}

/// Bind `addr` (port 0 picks an ephemeral port) and serve the API router
/// in a background task.
pub async fn start_server(
    state: Arc<AppState>,
    addr: SocketAddr,
) -> Result<ApiServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    let app = api_router(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    use crate::chat::FixedVerifier;
    use crate::config::ServerConfig;

    fn test_state() -> Arc<AppState> {
        let state = AppState::with_verifier(
            ServerConfig::instant(),
            Box::new(FixedVerifier { succeed: true }),
        )
        .unwrap();
        Arc::new(state)
    }

    fn loopback() -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
    }

    #[tokio::test]
    async fn start_serve_and_stop() {
        let mut server = start_server(test_state(), loopback())
            .await
            .expect("server should start");
        assert!(server.addr.port() > 0);

        let url = format!("http://{}/api/health", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert!(resp.status().is_success());
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["status"], "ok");

        server.shutdown();
        server.wait().await;
    }

    #[tokio::test]
    async fn classify_over_http() {
        let mut server = start_server(test_state(), loopback()).await.unwrap();

        let client = reqwest::Client::new();
        let resp = client
            .post(format!("http://{}/classify", server.addr))
            .json(&serde_json::json!({"glucose": 200}))
            .send()
            .await
            .unwrap();
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json[0]["disease"], "Type 2 Diabetes");
        assert_eq!(json[0]["confidence"], 90);

        server.shutdown();
        server.wait().await;
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let mut first = start_server(test_state(), loopback()).await.unwrap();
        let err = start_server(test_state(), first.addr).await;
        assert!(matches!(err, Err(ServerError::Bind { .. })));
        first.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_server(test_state(), loopback()).await.unwrap();
        server.shutdown();
        server.shutdown();
        server.wait().await;
    }
}
