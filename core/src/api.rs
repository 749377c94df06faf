//! Async record source backed by reqwest.
//!
//! `DinosaurApi` runs the `DinosaurClient` build/parse pair around a real
//! HTTP round-trip. It never retries; the controller owns retry.

use async_trait::async_trait;
use tracing::debug;

use crate::client::DinosaurClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Dinosaur;

/// Anything that can produce the ordered record list in one attempt.
#[async_trait]
pub trait RecordSource: Send + Sync + 'static {
    async fn fetch_records(&self) -> Result<Vec<Dinosaur>, ApiError>;
}

/// HTTP-backed `RecordSource` for a single configured endpoint.
#[derive(Debug, Clone)]
pub struct DinosaurApi {
    client: DinosaurClient,
    http: reqwest::Client,
}

impl DinosaurApi {
    /// # Errors
    ///
    /// Returns `ApiError::Network` when the reqwest client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::transport(e.to_string()))?;
        Ok(Self {
            client: DinosaurClient::from_config(config),
            http,
        })
    }

    pub fn client(&self) -> &DinosaurClient {
        &self.client
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
        };
        let mut builder = self.http.request(method, request.path.as_str());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        HttpResponse::from_body_bytes(status, &body)
    }
}

#[async_trait]
impl RecordSource for DinosaurApi {
    async fn fetch_records(&self) -> Result<Vec<Dinosaur>, ApiError> {
        let request = self.client.build_list_dinosaurs();
        debug!(url = %request.path, method = request.method.as_str(), "fetching dinosaurs");
        let response = self.execute(request).await?;
        self.client.parse_list_dinosaurs(response)
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        return ApiError::transport(format!("request timed out: {error}"));
    }
    ApiError::transport(error.to_string())
}
