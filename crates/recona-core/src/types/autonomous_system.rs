//! Autonomous system resource types.

use serde::{Deserialize, Serialize};

use super::common::{PageInfo, SearchPage};

/// An autonomous system and its announced address space
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutonomousSystem {
    /// AS number
    #[serde(default)]
    pub number: i64,

    /// Operating organization
    #[serde(default)]
    pub organization: Option<String>,

    /// Announced IPv4 ranges
    #[serde(default)]
    pub ipv4_ranges: Vec<AsSubnet>,

    /// Announced IPv6 ranges
    #[serde(default)]
    pub ipv6_ranges: Vec<AsSubnet>,

    /// Timestamp of the last update to this record
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A subnet announced by an autonomous system
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsSubnet {
    /// Network in CIDR notation
    #[serde(default)]
    pub cidr: Option<String>,

    /// Provider announcing the subnet
    #[serde(default)]
    pub isp: Option<String>,
}

/// Response shape for `/autonomous-system/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsResponse {
    /// Pagination metadata
    #[serde(flatten)]
    pub page: PageInfo,

    /// Matching AS records for this page
    #[serde(default)]
    pub autonomous_systems: Vec<AutonomousSystem>,
}

impl SearchPage for AsResponse {
    type Item = AutonomousSystem;

    fn into_items(self) -> Vec<AutonomousSystem> {
        self.autonomous_systems
    }
}
