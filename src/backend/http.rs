//! HTTP backend client
//!
//! Talks JSON to a dotfiles framework daemon exposing the dashboard API.

use crate::backend::error::BackendError;
use crate::backend::Backend;
use crate::models::{LogEntry, Plugin, SystemInfo, TestResults};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("dotfiles-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn post_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        log::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn system_info(&self) -> Result<SystemInfo, BackendError> {
        self.get_request("/api/system").await
    }

    async fn test_results(&self) -> Result<TestResults, BackendError> {
        self.get_request("/api/tests").await
    }

    async fn run_tests(&self) -> Result<TestResults, BackendError> {
        self.post_request("/api/tests/run").await
    }

    async fn plugins(&self) -> Result<Vec<Plugin>, BackendError> {
        self.get_request("/api/plugins").await
    }

    async fn logs(&self) -> Result<Vec<LogEntry>, BackendError> {
        self.get_request("/api/logs").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_segments() {
        let backend = HttpBackend::new("http://localhost:8686/").unwrap();
        assert_eq!(
            backend.build_url("/api/system"),
            "http://localhost:8686/api/system"
        );
        assert_eq!(
            backend.build_url("api/tests"),
            "http://localhost:8686/api/tests"
        );
    }
}
