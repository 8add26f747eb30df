//! Query server
//!
//! HTTP shell around the tour builder.
//!
//! # Endpoints
//!
//! - `POST /api/optimize-route` - Order stops into a closed tour
//! - `POST /api/export-gpx` - Same ordering, returned as a GPX track
//! - `GET /health` - Health check
//! - `GET /swagger-ui` - OpenAPI documentation
//! - everything else - static files (the web page), if a static dir is configured

pub mod api;

use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub use api::build_router;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default request body limit (2 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Default cap on stops per request. The build is O(N²); 10 000 stops take
/// well under a second.
pub const DEFAULT_MAX_STOPS: usize = 10_000;

/// Server settings, filled in from the command line
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Directory served for non-API paths; `None` disables static files
    pub static_dir: Option<PathBuf>,
    /// Largest accepted request body, in bytes
    pub max_body_bytes: usize,
    /// Most stops ordered in one request; larger requests get a 400
    pub max_stops: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: Some(PathBuf::from("static")),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_stops: DEFAULT_MAX_STOPS,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Bind and serve until the process is stopped
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = build_router(&config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr()?;

    tracing::info!("🌐 Server listening on http://{}", local);
    tracing::info!("📖 Swagger UI: http://{}/swagger-ui/", local);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
