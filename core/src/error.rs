//! Error types for the dinosaur API client.
//!
//! # Design
//! Two kinds only. `Network` covers everything between "request issued" and
//! "body received in full", including non-2xx statuses. `MalformedRecord`
//! covers a body that arrived but does not match the record contract.
//! Both are `Clone` so the controller can keep them inside `FetchState`.

use thiserror::Error;

/// Errors returned by `DinosaurClient::parse_*` and `DinosaurApi::fetch_records`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure, or the server answered with a non-2xx status.
    /// `status` is `None` when no response was received at all.
    #[error("{}", network_message(.status, .message))]
    Network { status: Option<u16>, message: String },

    /// The body is not valid JSON, not an array, or an element is not a
    /// well-formed record.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

/// Payload-free tag for `ApiError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    MalformedRecord,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Network {
            status: None,
            message: message.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        ApiError::Network {
            status: Some(status),
            message: body.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::MalformedRecord(_) => ErrorKind::MalformedRecord,
        }
    }

    /// HTTP status of a non-2xx response, if one was received.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ApiError::Network { status, .. } => *status,
            ApiError::MalformedRecord(_) => None,
        }
    }
}

fn network_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("HTTP {status}: {message}"),
        None => format!("network error: {message}"),
    }
}
