//! Core types and errors for the Recona API client.
//!
//! This crate provides the foundational types used across the Recona library:
//!
//! - **Types**: Strongly-typed representations of all Recona API responses
//! - **Errors**: Comprehensive error handling with [`ReconaError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use recona_core::{Domain, ReconaError, Result};
//!
//! fn process_domain(domain: Domain) -> Result<()> {
//!     println!("Name: {:?}", domain.name);
//!     println!("Updated: {:?}", domain.updated_at);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/recona-core/0.1.0")]

mod error;
pub mod types;

pub use error::{ReconaError, Result};
pub use types::*;
