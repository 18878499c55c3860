//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and checking responses.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use modlog_api::{create_app, create_app_state, create_app_state_with_repo, AppState};
use modlog_common::AppConfig;
use modlog_store::InMemoryLogRepository;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
///
/// The server task is aborted when the instance is dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over an in-memory repository
    pub async fn start(repo: InMemoryLogRepository) -> Result<Self> {
        let state = create_app_state_with_repo(AppConfig::default(), Arc::new(repo))?;
        Self::start_with_state(state).await
    }

    /// Start a server the way the binary does, from configuration
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        Self::start_with_state(state).await
    }

    async fn start_with_state(state: AppState) -> Result<Self> {
        let app = create_app(state);

        // Ephemeral port so tests can run in parallel
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Fetch one page of a sub's log, `None` meaning the unnumbered route
    pub async fn get_log(&self, sub: &str, page: Option<u32>) -> Result<Response> {
        match page {
            Some(page) => self.get(&format!("/api/v1/s/{sub}/log/{page}")).await,
            None => self.get(&format!("/api/v1/s/{sub}/log")).await,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
