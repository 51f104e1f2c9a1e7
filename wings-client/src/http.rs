//! HTTP transport for the remote store

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::{ClientConfig, ClientError, ClientResult};

/// Error body some stores send back (`{"message": "..."}` or `{"error": "..."}`)
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// HTTP client trait
///
/// Paths are relative to the configured base URL (`"products"`, `"sales"`).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    /// Delete ignores the response body
    async fn delete(&self, path: &str) -> ClientResult<()>;
    fn base_url(&self) -> &str;
}

/// Network HTTP client over reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Map a non-success status to an error, consuming the body
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.message)
            .unwrap_or(text);
        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Rejected(message),
            _ => ClientError::Status {
                status: status.as_u16(),
                body: message,
            },
        })
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ClientError::InvalidResponse("empty response body".into()));
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let response = self.client.put(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.client.delete(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
