//! Host (IP address) resource types.

use serde::{Deserialize, Serialize};

use super::certificate::{IssuerDn, SubjectDn};
use super::common::{Epss, PageInfo, SearchPage, SeverityDetails, Technology};
use super::domain::Extract;

/// Comprehensive information about a network host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Host {
    /// IP address of the host (IPv4 or IPv6)
    #[serde(default)]
    pub ip: Option<String>,

    /// Geographic location data
    #[serde(default)]
    pub geo: Option<Geo>,

    /// Internet service provider and network details
    #[serde(default)]
    pub isp: Option<Isp>,

    /// Open ports and the services running on them
    #[serde(default)]
    pub ports: Vec<Port>,

    /// Reverse DNS pointer record
    #[serde(default)]
    pub ptr_record: Option<PtrRecord>,

    /// Security risk assessment bucketed by severity
    #[serde(default)]
    pub severity_details: Option<SeverityDetails>,

    /// Known vulnerabilities found on the host
    #[serde(default)]
    pub cve_list: Vec<HostCve>,

    /// Detected technologies and software
    #[serde(default)]
    pub technologies: Vec<Technology>,

    /// Abuse reports associated with this IP
    #[serde(default)]
    pub abuses: Option<Abuse>,

    /// SSL certificates observed on the host's ports
    #[serde(default)]
    pub certificate_summaries: Vec<CertificateSummary>,

    /// Timestamp of the last update to this record
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Host {
    /// Port numbers with an observed service
    #[must_use]
    pub fn open_ports(&self) -> Vec<i64> {
        self.ports.iter().map(|p| p.port).collect()
    }
}

/// An open port and the service observed on it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Port {
    /// Port number
    #[serde(default)]
    pub port: i64,

    /// Service banner
    #[serde(default)]
    pub banner: Option<String>,

    /// Application CPE identifier
    #[serde(default)]
    pub cpe_application: Option<String>,

    /// Hardware CPE identifier
    #[serde(default)]
    pub cpe_hardware: Option<String>,

    /// Operating system CPE identifier
    #[serde(default)]
    pub cpe_os: Option<String>,

    /// Device type classification
    #[serde(default)]
    pub device_type: Option<String>,

    /// Web content extracted from the service, if HTTP
    #[serde(default)]
    pub extract: Option<Extract>,

    /// Hostname presented by the service
    #[serde(default)]
    pub hostname: Option<String>,

    /// Additional service information
    #[serde(default)]
    pub info: Option<String>,

    /// Detected operating system
    #[serde(default)]
    pub operation_system: Option<String>,

    /// Product name
    #[serde(default)]
    pub product: Option<String>,

    /// Service name (e.g. "http", "ssh")
    #[serde(default)]
    pub service: Option<String>,

    /// Product version
    #[serde(default)]
    pub version: Option<String>,

    /// The service speaks TLS
    #[serde(default)]
    pub is_ssl: bool,

    /// When the port was last scanned
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Geographic location of a host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geo {
    /// City name
    #[serde(default)]
    pub city_name: Option<String>,

    /// Country name
    #[serde(default)]
    pub country: Option<String>,

    /// ISO 3166-1 country code
    #[serde(default)]
    pub country_iso_code: Option<String>,

    /// Coordinates
    #[serde(default)]
    pub location: Option<Location>,
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Location {
    /// Longitude
    #[serde(default)]
    pub lon: f64,

    /// Latitude
    #[serde(default)]
    pub lat: f64,
}

/// Internet service provider details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Isp {
    /// Autonomous system number
    #[serde(default)]
    pub as_num: Option<u32>,

    /// Autonomous system organization
    #[serde(default)]
    pub as_org: Option<String>,

    /// Provider name
    #[serde(default)]
    pub isp: Option<String>,

    /// Announced network in CIDR notation
    #[serde(default)]
    pub network: Option<String>,
}

/// Reverse DNS pointer record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PtrRecord {
    /// Hostname the IP resolves back to
    #[serde(default)]
    pub value: Option<String>,

    /// When the record was last resolved
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A vulnerability found on a host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostCve {
    /// CVE identifier
    #[serde(default)]
    pub id: Option<String>,

    /// CVSS base score
    #[serde(default)]
    pub base_score: f32,

    /// Ports the vulnerability applies to
    #[serde(default)]
    pub ports: Vec<i64>,

    /// Severity label derived from the score
    #[serde(default)]
    pub severity: Option<String>,

    /// CVSS vector string
    #[serde(default)]
    pub vector: Option<String>,

    /// Vulnerability description
    #[serde(default)]
    pub description: Option<String>,

    /// Technologies the CVE applies to
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Exploit prediction scoring data
    #[serde(default)]
    pub epss: Option<Epss>,

    /// Proof-of-concept exploit code is known to exist
    #[serde(default)]
    pub has_poc: bool,
}

/// Abuse reports and reputation data for an IP
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abuse {
    /// Aggregated abuse confidence score
    #[serde(default)]
    pub score: i32,

    /// Number of reports filed
    #[serde(default)]
    pub reports_num: i64,

    /// Individual abuse reports
    #[serde(default)]
    pub reports: Vec<AbuseReport>,

    /// All categories the IP was reported under
    #[serde(default)]
    pub all_categories: Vec<AbuseCategory>,

    /// The IP is on a weak whitelist
    #[serde(default)]
    pub is_whitelist_weak: bool,

    /// The IP is on a strong whitelist
    #[serde(default)]
    pub is_whitelist_strong: bool,

    /// When the abuse data was last refreshed
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A single abuse report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbuseReport {
    /// When the report was filed
    #[serde(default)]
    pub reported_at: Option<String>,

    /// Reporter's comment
    #[serde(default)]
    pub comment: Option<String>,

    /// Categories assigned by the reporter
    #[serde(default)]
    pub categories: Vec<AbuseCategory>,
}

/// An abuse report category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbuseCategory {
    /// Category ID
    #[serde(default)]
    pub id: i32,

    /// Category name
    #[serde(default)]
    pub name: Option<String>,

    /// Category description
    #[serde(default)]
    pub description: Option<String>,
}

/// Summary of an SSL certificate observed on a host port
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateSummary {
    /// SHA-256 fingerprint, links to the full certificate resource
    #[serde(default)]
    pub fingerprint_sha256: Option<String>,

    /// Issuer distinguished name
    #[serde(default)]
    pub issuer_dn: Option<IssuerDn>,

    /// Subject distinguished name
    #[serde(default)]
    pub subject_dn: Option<SubjectDn>,

    /// Negotiated TLS version
    #[serde(default)]
    pub tls_version: Option<String>,

    /// End of the validity period
    #[serde(default)]
    pub validity_end: Option<String>,

    /// DNS names the certificate covers
    #[serde(default)]
    pub dns_names: Vec<String>,

    /// Port the certificate was served on
    #[serde(default)]
    pub port: i64,

    /// When the summary was last refreshed
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response shape for `/hosts/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostsResponse {
    /// Pagination metadata
    #[serde(flatten)]
    pub page: PageInfo,

    /// Matching host records for this page
    #[serde(default)]
    pub hosts: Vec<Host>,
}

impl SearchPage for HostsResponse {
    type Item = Host;

    fn into_items(self) -> Vec<Host> {
        self.hosts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_host_with_ports() {
        let json = r#"{
            "ip": "203.0.113.7",
            "ports": [
                {"port": 22, "service": "ssh", "product": "OpenSSH", "version": "9.6"},
                {"port": 443, "service": "http", "is_ssl": true}
            ],
            "geo": {"country_iso_code": "NL", "location": {"lon": 4.9, "lat": 52.37}},
            "severity_details": {"high": 1, "medium": 2}
        }"#;

        let host: Host = serde_json::from_str(json).unwrap();
        assert_eq!(host.open_ports(), [22, 443]);
        assert!(host.ports[1].is_ssl);
        assert_eq!(host.geo.unwrap().country_iso_code.as_deref(), Some("NL"));
        assert_eq!(host.severity_details.unwrap().total(), 3);
    }
}
