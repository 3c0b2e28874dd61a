//! HTTP client module
//!
//! Provides the HTTP client the GraphQL transport sends requests through.
//!
//! # Features
//!
//! - **Bearer credentials**: Sent as a default `Authorization` header
//! - **Optional Retries**: Bounded retry on 429/5xx, timeouts and refused connections
//! - **Backoff Strategies**: Constant, linear, and exponential backoff

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
