#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_client::api::EntriesClient;
use marquee_client::config::ClientConfig;
use marquee_db::store::{EntryStore, MemoryEntryStore};
use tokio::task::JoinHandle;

/// A running entry service on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve the production router over a fresh in-memory store.
    pub async fn start() -> Self {
        Self::with_store(Arc::new(MemoryEntryStore::new())).await
    }

    pub async fn with_store(store: Arc<dyn EntryStore>) -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..ServerConfig::default()
        };
        let state = AppState { store };
        let app = build_app_router(state, &config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, handle }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(format!("http://{}", self.addr))
    }

    pub fn client(&self) -> EntriesClient {
        EntriesClient::new(&self.config())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
