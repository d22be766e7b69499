//! HTTP client for the Recona API.
//!
//! This crate provides the main [`ReconaClient`]: a rate-limited,
//! authenticated dispatcher plus typed endpoint wrappers for domains,
//! hosts, certificates, CVEs, autonomous systems and account data.

#![doc(html_root_url = "https://docs.rs/recona-client/0.1.0")]

pub mod api;
mod client;
mod limiter;
mod transport;

pub use client::{ReconaClient, ReconaClientBuilder};
pub use recona_core::{ReconaError, Result};
