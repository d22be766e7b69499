//! CVE and CWE resource types, following the NIST data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Epss, PageInfo, SearchPage};

/// A CVE record in the NIST data model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NistCveData {
    /// CVE identifier (e.g. "CVE-2021-44228")
    #[serde(default)]
    pub id: String,

    /// CVE status (e.g. "Published", "Modified", "Rejected")
    #[serde(default)]
    pub status: String,

    /// Proof-of-concept exploit code is available
    #[serde(default)]
    pub has_poc: bool,

    /// EPSS data is available
    #[serde(default)]
    pub has_epss: bool,

    /// CVSS data is available
    #[serde(default)]
    pub has_cvss: bool,

    /// Specific target configurations are defined
    #[serde(default)]
    pub has_targets: bool,

    /// Listed in CISA's Known Exploited Vulnerabilities catalog
    #[serde(default)]
    pub is_kev_listed: bool,

    /// Additional classification tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Vulnerability description
    #[serde(default)]
    pub description: String,

    /// External links and documentation
    #[serde(default)]
    pub references: Vec<Reference>,

    /// Known Exploited Vulnerability catalog entry
    #[serde(default)]
    pub kev: Option<Kev>,

    /// CVSS metrics and scores
    #[serde(default)]
    pub cvss: Option<Cvss>,

    /// Exploit prediction scoring data
    #[serde(default)]
    pub epss: Option<Epss>,

    /// Proof-of-concept exploit information
    #[serde(default)]
    pub poc: Option<Poc>,

    /// Associated weakness identifiers
    #[serde(default)]
    pub cwes: Vec<String>,

    /// Vulnerable software configurations
    #[serde(default)]
    pub configurations: Vec<Configuration>,

    /// When the CVE was last updated in the database
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,

    /// When the CVE was first published
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// An external reference for a CVE
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reference {
    /// Reference source
    #[serde(default)]
    pub source: String,

    /// Reference tags (e.g. "Patch", "Exploit")
    #[serde(default)]
    pub tags: Vec<String>,

    /// Reference URL
    #[serde(default)]
    pub url: String,
}

/// CISA Known Exploited Vulnerabilities catalog entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Kev {
    /// Catalog vulnerability name
    #[serde(default)]
    pub vulnerability_name: String,

    /// Required remediation action
    #[serde(default)]
    pub action_required: String,

    /// When the exploit was added to the catalog
    #[serde(default)]
    pub exploit_added: Option<DateTime<Utc>>,

    /// Remediation due date
    #[serde(default)]
    pub action_due: Option<DateTime<Utc>>,
}

/// A vulnerable software configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// Match nodes
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// Boolean operator combining the nodes
    #[serde(default)]
    pub operator: String,
}

/// A node within a configuration match expression
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    /// CPE match criteria
    #[serde(default)]
    pub cpe_match: Vec<CpeMatch>,

    /// Negate the match
    #[serde(default)]
    pub negate: bool,
}

/// A CPE match criterion with optional version bounds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpeMatch {
    /// CPE criteria string
    #[serde(default)]
    pub criteria: String,

    /// NVD match criteria identifier
    #[serde(default)]
    pub match_criteria_id: String,

    /// Exclusive upper version bound
    #[serde(default)]
    pub version_end_excluding: String,

    /// Inclusive upper version bound
    #[serde(default)]
    pub version_end_including: String,

    /// Exclusive lower version bound
    #[serde(default)]
    pub version_start_excluding: String,

    /// Inclusive lower version bound
    #[serde(default)]
    pub version_start_including: String,

    /// Matching products are vulnerable
    #[serde(default)]
    pub vulnerable: bool,
}

/// Aggregated CVSS scoring for a CVE
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cvss {
    /// Representative base score
    #[serde(default)]
    pub score: f64,

    /// Severity label derived from the score
    #[serde(default)]
    pub severity: String,

    /// Per-version metric sets
    #[serde(default)]
    pub metrics: Option<Metric>,
}

/// CVSS metric sets grouped by specification version
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metric {
    /// CVSS v2 metrics
    #[serde(default)]
    pub v2: Vec<CvssV2>,

    /// CVSS v3.0 metrics
    #[serde(default)]
    pub v3: Vec<CvssV3>,

    /// CVSS v3.1 metrics
    #[serde(default, rename = "v3_1")]
    pub v31: Vec<CvssV3>,

    /// CVSS v4 metrics
    #[serde(default)]
    pub v4: Vec<CvssV4>,
}

/// A CVSS v2 metric entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvssV2 {
    /// Severity label
    #[serde(default)]
    pub base_severity: String,

    /// Scoring vector data
    #[serde(default)]
    pub cvss_data: Option<CvssDataV2>,

    /// Exploitability subscore
    #[serde(default)]
    pub exploitability_score: f64,

    /// Impact subscore
    #[serde(default)]
    pub impact_score: f64,

    /// Scoring source
    #[serde(default)]
    pub source: String,

    /// Primary or secondary scoring
    #[serde(default, rename = "type")]
    pub kind: String,

    /// User interaction is required to exploit
    #[serde(default)]
    pub user_interaction_required: bool,
}

/// CVSS v2 vector components
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvssDataV2 {
    /// Access complexity
    #[serde(default)]
    pub access_complexity: String,

    /// Access vector
    #[serde(default)]
    pub access_vector: String,

    /// Authentication requirement
    #[serde(default)]
    pub authentication: String,

    /// Availability impact
    #[serde(default)]
    pub availability_impact: String,

    /// Base score
    #[serde(default)]
    pub base_score: f64,

    /// Confidentiality impact
    #[serde(default)]
    pub confidentiality_impact: String,

    /// Integrity impact
    #[serde(default)]
    pub integrity_impact: String,

    /// Vector string
    #[serde(default)]
    pub vector_string: String,

    /// Specification version
    #[serde(default)]
    pub version: String,
}

/// A CVSS v3.x metric entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvssV3 {
    /// Scoring vector data
    #[serde(default)]
    pub cvss_data: Option<CvssDataV3>,

    /// Exploitability subscore
    #[serde(default)]
    pub exploitability_score: f64,

    /// Impact subscore
    #[serde(default)]
    pub impact_score: f64,

    /// Scoring source
    #[serde(default)]
    pub source: String,

    /// Primary or secondary scoring
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// CVSS v3.x vector components
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvssDataV3 {
    /// Attack complexity
    #[serde(default)]
    pub attack_complexity: String,

    /// Attack vector
    #[serde(default)]
    pub attack_vector: String,

    /// Availability impact
    #[serde(default)]
    pub availability_impact: String,

    /// Base score
    #[serde(default)]
    pub base_score: f64,

    /// Severity label
    #[serde(default)]
    pub base_severity: String,

    /// Confidentiality impact
    #[serde(default)]
    pub confidentiality_impact: String,

    /// Integrity impact
    #[serde(default)]
    pub integrity_impact: String,

    /// Privileges required
    #[serde(default)]
    pub privileges_required: String,

    /// Scope change
    #[serde(default)]
    pub scope: String,

    /// User interaction requirement
    #[serde(default)]
    pub user_interaction: String,

    /// Vector string
    #[serde(default)]
    pub vector_string: String,

    /// Specification version
    #[serde(default)]
    pub version: String,
}

/// A CVSS v4 metric entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvssV4 {
    /// Scoring vector data
    #[serde(default)]
    pub cvss_data: Option<CvssDataV4>,

    /// Scoring source
    #[serde(default)]
    pub source: String,

    /// Primary or secondary scoring
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// CVSS v4 vector components (core subset)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CvssDataV4 {
    /// Attack complexity
    #[serde(default)]
    pub attack_complexity: String,

    /// Attack requirements
    #[serde(default)]
    pub attack_requirements: String,

    /// Attack vector
    #[serde(default)]
    pub attack_vector: String,

    /// Base score
    #[serde(default)]
    pub base_score: f64,

    /// Severity label
    #[serde(default)]
    pub base_severity: String,

    /// Exploit maturity
    #[serde(default)]
    pub exploit_maturity: String,

    /// Privileges required
    #[serde(default)]
    pub privileges_required: String,

    /// User interaction requirement
    #[serde(default)]
    pub user_interaction: String,

    /// Vector string
    #[serde(default)]
    pub vector_string: String,

    /// Specification version
    #[serde(default)]
    pub version: String,
}

/// Proof-of-concept exploit information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Poc {
    /// URLs of known proof-of-concept exploits
    #[serde(default)]
    pub references: Vec<String>,
}

/// A Common Weakness Enumeration entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cwe {
    /// CWE code (e.g. "CWE-79")
    #[serde(default)]
    pub code: String,

    /// Weakness name
    #[serde(default)]
    pub name: String,

    /// Abstraction level (Base, Variant, Class)
    #[serde(default)]
    pub abstraction: String,

    /// Structure (Simple, Composite)
    #[serde(default)]
    pub structure: String,

    /// Entry status
    #[serde(default)]
    pub status: String,

    /// Weakness description
    #[serde(default)]
    pub description: String,

    /// Extended description
    #[serde(default)]
    pub extended_description: String,
}

/// Response shape for `/cve/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CveResponse {
    /// Pagination metadata
    #[serde(flatten)]
    pub page: PageInfo,

    /// Matching CVE records for this page
    #[serde(default)]
    pub cve_list: Vec<NistCveData>,
}

impl SearchPage for CveResponse {
    type Item = NistCveData;

    fn into_items(self) -> Vec<NistCveData> {
        self.cve_list
    }
}

/// Request body for the `/cwe` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CweParams {
    /// CWE IDs to look up (e.g. `["CWE-79", "CWE-89"]`)
    pub ids: Vec<String>,
}

/// Response shape for the `/cwe` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CweResponse {
    /// Matching CWE entries
    #[serde(default)]
    pub items: Vec<Cwe>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_cve_record() {
        let json = r#"{
            "id": "CVE-2021-44228",
            "status": "Published",
            "has_poc": true,
            "is_kev_listed": true,
            "description": "Apache Log4j2 JNDI features...",
            "cvss": {
                "score": 10.0,
                "severity": "CRITICAL",
                "metrics": {"v3_1": [{"cvss_data": {"base_score": 10.0, "base_severity": "CRITICAL"}}]}
            },
            "epss": {"score": 0.97, "percentile": 0.999},
            "cwes": ["CWE-502"],
            "published_at": "2021-12-10T10:15:09Z"
        }"#;

        let cve: NistCveData = serde_json::from_str(json).unwrap();
        assert_eq!(cve.id, "CVE-2021-44228");
        assert!(cve.has_poc && cve.is_kev_listed);
        let cvss = cve.cvss.unwrap();
        assert_eq!(cvss.severity, "CRITICAL");
        assert_eq!(cvss.metrics.unwrap().v31.len(), 1);
        assert!(cve.published_at.is_some());
    }
}
