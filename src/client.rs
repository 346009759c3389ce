use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::call::ApiResponse;
use crate::config::ClientConfig;
use crate::errors::CallError;

/// Thin reqwest client producing [`ApiResponse`]s for
/// [`safe_api_call`](crate::call::safe_api_call)
#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Build HTTP client with required headers
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .context("Failed to build HTTP client")?;

        info!(base_url = %config.base_url, "Initialized API client");

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Wrap an already configured reqwest client
    pub fn with_http_client(http_client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Start a request against `path` under the base URL
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client.request(method, self.config.url_for(path))
    }

    /// Send a prepared request and read the response
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, CallError> {
        let response = request.send().await?;
        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Received response"
        );
        ApiResponse::from_reqwest(response).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, CallError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, CallError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, CallError> {
        self.send(self.request(Method::DELETE, path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        let config = ClientConfig::new("https://api.example.com");
        let client = ApiClient::new(config).unwrap();
        assert_eq!(client.config().base_url, "https://api.example.com");
    }

    #[test]
    fn test_request_targets_base_url() {
        let client = ApiClient::new(ClientConfig::new("https://api.example.com/v2")).unwrap();
        let request = client.request(Method::GET, "/status").build().unwrap();

        assert_eq!(request.url().as_str(), "https://api.example.com/v2/status");
        assert_eq!(request.method(), &Method::GET);
    }
}
