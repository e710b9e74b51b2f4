//! HTTP client module for smoke testing
//!
//! Provides the HTTP client used to reach the service under test.

mod client;

pub use client::{HttpClient, HttpRequest, HttpResponse};
