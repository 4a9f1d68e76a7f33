//! HTTP client for the backend REST API.

pub mod auth;
pub mod types;
