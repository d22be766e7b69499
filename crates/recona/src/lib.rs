//! Rust client for the Recona reconnaissance API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use recona::ReconaClient;
//!
//! #[tokio::main]
//! async fn main() -> recona::Result<()> {
//!     let client = ReconaClient::new("your-api-token")?;
//!
//!     // Get domain information
//!     let domain = client.domains().details("example.com").await?;
//!     println!("Updated: {:?}", domain.updated_at);
//!
//!     // Collect every subdomain, paginating automatically
//!     let subdomains = client
//!         .domains()
//!         .search_all(recona::Search::query("name.ends_with: example.com"))
//!         .await?;
//!     println!("Found {} subdomains", subdomains.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! Every call is throttled against one shared token bucket (10
//! requests/second with a burst of 2 by default, adjustable at runtime
//! via [`ReconaClient::set_rate_limit`]) so a busy process stays inside
//! the API's per-token quota.
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/recona/0.1.0")]

// Re-export core types
pub use recona_core::*;

// Re-export client
pub use recona_client::{api, ReconaClient, ReconaClientBuilder};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
