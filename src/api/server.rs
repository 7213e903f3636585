//! Triage API server lifecycle: starts/stops the axum HTTP server.
//!
//! Pattern: bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;

use serde::Serialize;
use tokio::sync::oneshot;

use crate::api::router::build_router;
use crate::api::types::ApiContext;
use crate::config::ServerConfig;

/// Metadata for a running server.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub addr: SocketAddr,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running triage server.
pub struct TriageServer {
    pub info: ServerInfo,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl TriageServer {
    /// Signal a graceful shutdown. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Triage server shutdown signal sent");
        }
    }

    /// Wait for the background task to finish serving.
    pub async fn stopped(mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("Triage server task failed: {e}");
            }
        }
    }
}

impl Drop for TriageServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Bind the configured `host:port` and start serving.
pub async fn start_server(config: ServerConfig) -> std::io::Result<TriageServer> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    serve(listener, ApiContext::new(config))
}

/// Start the server on an explicit address (port 0 picks an ephemeral port).
pub async fn start_server_on(ctx: ApiContext, addr: SocketAddr) -> std::io::Result<TriageServer> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve(listener, ctx)
}

fn serve(listener: tokio::net::TcpListener, ctx: ApiContext) -> std::io::Result<TriageServer> {
    let addr = listener.local_addr()?;

    let app = build_router(ctx);

    let info = ServerInfo {
        addr,
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Triage server received shutdown signal");
        };

        tracing::info!(%addr, "Triage server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Triage server error: {e}");
        }

        tracing::info!("Triage server stopped");
    });

    Ok(TriageServer {
        info,
        shutdown_tx: Some(shutdown_tx),
        task: Some(task),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn localhost() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    async fn test_server() -> TriageServer {
        start_server_on(ApiContext::new(ServerConfig::default()), localhost())
            .await
            .expect("server should start")
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let mut server = test_server().await;
        assert!(server.info.port > 0);

        let url = format!("http://127.0.0.1:{}/health", server.info.port);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["status"], "healthy");

        server.shutdown();
        server.stopped().await;
    }

    #[tokio::test]
    async fn language_cookie_round_trip_over_http() {
        let mut server = test_server().await;
        let port = server.info.port;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("http://127.0.0.1:{port}/set_language"))
            .json(&serde_json::json!({ "language": "en" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let cookie = resp
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .unwrap()
            .to_string();

        let resp = client
            .post(format!("http://127.0.0.1:{port}/calculate_ctas"))
            .header(reqwest::header::COOKIE, cookie)
            .form(&[
                ("patient_age", "70"),
                ("chief_complaint", "other"),
                ("pain_score", "5"),
            ])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["lang"], "en");
        assert_eq!(json["ctas_level"], 3);

        server.shutdown();
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let mut server = test_server().await;
        let url = format!("http://127.0.0.1:{}/nonexistent", server.info.port);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
        server.shutdown();
    }

    #[tokio::test]
    async fn dropping_the_handle_stops_the_server() {
        let server = test_server().await;
        let port = server.info.port;
        drop(server);

        // Give the graceful shutdown a moment to close the listener.
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        let url = format!("http://127.0.0.1:{port}/health");
        assert!(reqwest::get(&url).await.is_err());
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = test_server().await;
        server.shutdown();
        server.shutdown();
    }
}
