//! Clockd - current server time over HTTP
//!
//! Single-endpoint JSON time service.
//! This library exposes modules for integration testing.

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod server;
