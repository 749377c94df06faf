//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data.
//! `DinosaurClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network, so a mobile host can run the
//! round-trip on its own HTTP stack. `DinosaurApi` runs the same two steps
//! around a reqwest call for hosts that let the core do the I/O.
//!
//! All fields use owned types (`String`, `Vec`) so values can cross FFI
//! boundaries without lifetime concerns.

use crate::error::ApiError;

/// HTTP method for a request. The API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL.
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by whoever executed the `HttpRequest`, then passed to
/// `DinosaurClient::parse_list_dinosaurs`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Build a response from a raw body.
    ///
    /// A 2xx body must be valid UTF-8 or it is `MalformedRecord`. Bodies of
    /// other statuses only feed error messages and are decoded lossily.
    pub fn from_body_bytes(status: u16, body: &[u8]) -> Result<Self, ApiError> {
        let body = if (200..300).contains(&status) {
            String::from_utf8(body.to_vec())
                .map_err(|e| ApiError::MalformedRecord(format!("body is not valid UTF-8: {e}")))?
        } else {
            String::from_utf8_lossy(body).into_owned()
        };
        Ok(Self {
            status,
            headers: Vec::new(),
            body,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
