//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    http::{header, StatusCode, Uri},
    Router,
};
use brasil_relay::{HttpServer, RelayConfig, Shutdown};
use serde_json::Value;
use tokio::net::TcpListener;

/// A mock upstream API that answers every path with a fixed status and body.
pub struct MockUpstream {
    pub addr: SocketAddr,
    hits: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Path and query of every request received so far.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

/// Start a mock upstream on an ephemeral port answering with JSON.
pub async fn start_mock_upstream(status: u16, body: Value) -> MockUpstream {
    start_raw_upstream(status, "application/json", body.to_string()).await
}

/// Start a mock upstream answering with an arbitrary body.
pub async fn start_raw_upstream(
    status: u16,
    content_type: &'static str,
    body: String,
) -> MockUpstream {
    let hits = Arc::new(Mutex::new(Vec::new()));
    let recorded = hits.clone();
    let status = StatusCode::from_u16(status).unwrap();

    let app = Router::new().fallback(move |uri: Uri| {
        let recorded = recorded.clone();
        let body = body.clone();
        async move {
            let target = uri
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_default();
            recorded.lock().unwrap().push(target);
            (status, [(header::CONTENT_TYPE, content_type)], body)
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream { addr, hits }
}

/// A relay instance running on an ephemeral port.
pub struct TestRelay {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestRelay {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestRelay {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the relay pointed at `upstream_base`.
pub async fn start_relay(upstream_base: &str) -> TestRelay {
    let mut config = RelayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.base_url = upstream_base.to_string();
    config.upstream.system_proxy = false;

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Listener is already bound; give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(20)).await;

    TestRelay { addr, shutdown }
}

/// A valid request path for every relayed resource.
#[allow(dead_code)]
pub const ALL_ROUTES: [&str; 15] = [
    "/api/banks",
    "/api/cambio",
    "/api/cep/01001000",
    "/api/cnpj/19131243000197",
    "/api/corretoras",
    "/api/cptec/244",
    "/api/ddd/11",
    "/api/feriados/2024",
    "/api/fipe/038003-1",
    "/api/ibge/nomes/maria",
    "/api/isbn/9788545702870",
    "/api/ncm/0101.21.00",
    "/api/pix",
    "/api/registrobr/brasilapi.com.br",
    "/api/taxas",
];
