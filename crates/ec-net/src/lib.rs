//! HTTP client for the remote care-resources API.

pub mod client;

pub use client::{ResourceClient, ResourceClientConfig, DEFAULT_BASE_URL};
