//! Strongly-typed representations of Recona API requests and responses.

mod account;
mod autonomous_system;
mod certificate;
mod common;
mod cve;
mod domain;
mod host;

pub use account::*;
pub use autonomous_system::*;
pub use certificate::*;
pub use common::*;
pub use cve::*;
pub use domain::*;
pub use host::*;
