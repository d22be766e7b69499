//! API endpoint modules.

mod account;
mod autonomous_systems;
mod certificates;
mod cves;
mod domains;
mod hosts;

pub use account::AccountApi;
pub use autonomous_systems::AutonomousSystemsApi;
pub use certificates::CertificatesApi;
pub use cves::CvesApi;
pub use domains::DomainsApi;
pub use hosts::HostsApi;
