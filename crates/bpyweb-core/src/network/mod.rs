//! HTTP transport for upstream services.

mod client;

pub use client::{HttpClient, build_url};
