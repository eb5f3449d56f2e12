//! HTTP layer for the card search API
//!
//! - [`HttpClient`]: GET with retries, Scryfall error decoding and a request budget
//! - [`Backoff`]: constant, linear or exponential delay between retries
//! - [`RateLimiter`]: governor token bucket shared by all requests of a client

mod backoff;
mod client;
mod rate_limit;

pub use backoff::Backoff;
pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
