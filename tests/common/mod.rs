//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    http::{HeaderMap, StatusCode, Uri},
    routing::get,
    Router,
};
use fixtures_relay::config::{ListenerConfig, RelayConfig, RunMode, UpstreamConfig};
use fixtures_relay::HttpServer;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const TEST_API_KEY: &str = "test-api-key";

/// A request seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

/// Mock upstream API that records every request it receives.
pub struct MockUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request received so far.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one upstream request");
        requests.into_iter().next().unwrap()
    }
}

/// Start a mock upstream answering `GET /fixtures` with a fixed status and body.
pub async fn start_mock_upstream(status: StatusCode, body: &'static str) -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let app = Router::new().route(
        "/fixtures",
        get(move |uri: Uri, headers: HeaderMap| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(RecordedRequest {
                    path: uri.path().to_string(),
                    query: uri.query().map(str::to_string),
                    headers,
                });
                (status, body)
            }
        }),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream { addr, requests }
}

/// Start a raw backend that promises more body bytes than it sends, then
/// closes the connection.
pub async fn start_truncating_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let response =
                    "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"resp";
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// An address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Stops a relay started by [`start_relay`]. Dropping it also stops the relay.
pub struct RelayHandle(oneshot::Sender<()>);

impl RelayHandle {
    pub fn trigger(self) {
        let _ = self.0.send(());
    }
}

/// Start the relay pointed at `base_url`. Keep the returned handle alive for
/// the duration of the test.
pub async fn start_relay(base_url: String) -> (SocketAddr, RelayHandle) {
    let config = RelayConfig {
        listener: ListenerConfig::on_port(0),
        upstream: UpstreamConfig {
            api_key: TEST_API_KEY.into(),
            base_url,
        },
        mode: RunMode::Debug,
    };

    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let _ = server
            .run(listener, async move {
                let _ = rx.await;
            })
            .await;
    });

    (addr, RelayHandle(tx))
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
