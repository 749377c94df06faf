//! Stateless HTTP request builder and response parser for the dinosaur API.
//!
//! # Design
//! `DinosaurClient` holds only the endpoint URL and carries no mutable state
//! between calls. The single operation is split into `build_list_dinosaurs`,
//! which produces an `HttpRequest`, and `parse_list_dinosaurs`, which consumes
//! an `HttpResponse`. Whoever sits between the two performs the round-trip.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Dinosaur;

/// Synchronous, stateless client for the dinosaur API.
#[derive(Debug, Clone)]
pub struct DinosaurClient {
    endpoint: String,
}

impl DinosaurClient {
    /// Client for `<base_url>/dinosaurs`.
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&ApiConfig::new(base_url))
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            endpoint: join_url(&config.base_url, &config.path),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_list_dinosaurs(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.endpoint.clone(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Decode a list response, preserving array order.
    ///
    /// Any non-2xx status is a `Network` error. A body that is not a JSON
    /// array of well-formed records is `MalformedRecord`; no partial list is
    /// ever returned.
    pub fn parse_list_dinosaurs(&self, response: HttpResponse) -> Result<Vec<Dinosaur>, ApiError> {
        if !response.is_success() {
            return Err(ApiError::status(response.status, response.body));
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::MalformedRecord(e.to_string()))
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}
