//! API client core and fetch-state controller for the dinosaur list.
//!
//! # Overview
//! Fetches the dinosaur list from one HTTP endpoint and tracks the result as
//! a `FetchState` (`Loading`, `Success`, `Error`) that a presentation layer
//! renders.
//!
//! # Design
//! - `DinosaurClient` is stateless: `build_*` produces a request and
//!   `parse_*` consumes a response, so a host may run the round-trip itself.
//! - `DinosaurApi` runs the same pair around reqwest and implements
//!   `RecordSource`.
//! - `FetchController` owns the state, runs attempts on a tokio runtime and
//!   exposes `start`, `retry`, `state` and `subscribe`.
//! - The record type is defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;

pub use api::{DinosaurApi, RecordSource};
pub use client::DinosaurClient;
pub use config::ApiConfig;
pub use controller::{FetchController, FetchState};
pub use error::{ApiError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::Dinosaur;
